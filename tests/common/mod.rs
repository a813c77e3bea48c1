use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use notegen::llm::{GenerationRequest, TextGenerator, UpstreamFailure};
use notegen::note::NoteService;

#[allow(dead_code)]
pub fn run_notegen(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

/// Isolated HOME and XDG directories for running the binary.
#[allow(dead_code)]
pub struct TestEnv {
    home: TempDir,
    config: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_notegen"))
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env_remove("NOTEGEN_OPENAI_API_KEY")
            .env_remove("OPENAI_API_KEY")
            .env_remove("RUST_LOG")
            .envs(envs.iter().copied())
            .output()
            .expect("failed to execute notegen binary")
    }

    pub fn config_path(&self) -> PathBuf {
        let output = self.run(&["config", "path"]);
        assert!(
            output.status.success(),
            "config path should succeed\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );

        let path = String::from_utf8_lossy(&output.stdout);
        PathBuf::from(path.trim())
    }

    pub fn write_config(&self, contents: &str) {
        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).expect("create config parent directory");
        }
        std::fs::write(&config_path, contents).expect("write config file");
    }
}

/// Scripted text generator that counts its calls.
#[allow(dead_code)]
pub struct ScriptedGenerator {
    reply: Option<&'static str>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedGenerator {
    /// Answers every call with `text`.
    pub fn replying(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text),
            calls: AtomicUsize::new(0),
        })
    }

    /// Fails every call like an unreachable provider.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn service(self: &Arc<Self>) -> NoteService {
        NoteService::new(self.clone(), Duration::from_secs(5))
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(&self, _request: GenerationRequest<'_>) -> Result<String, UpstreamFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Some(text) => Ok(text.to_string()),
            None => Err(UpstreamFailure::Status {
                status: 502,
                body: "connection reset".to_string(),
            }),
        }
    }
}
