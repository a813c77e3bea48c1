use crate::note::Category;

/// System message sent with every generation request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that writes short, warm, and \
personalized messages for small businesses. Keep the tone friendly and professional.";

/// Build the user prompt for a note. Name and subject are embedded verbatim.
pub fn build_prompt(category: Category, name: &str, subject: &str) -> String {
    match category {
        Category::ThankYou => format!(
            "Write a short, personalized thank-you note for a customer named {name} who \
purchased {subject}. Make it warm and specific to the product they bought."
        ),
        Category::Apology => format!(
            "Write a short, personalized apology note for a customer named {name} regarding \
issues with {subject}. Make it sincere and show that you're taking responsibility."
        ),
        Category::Welcome => format!(
            "Write a short, personalized welcome message for a customer named {name} who is \
joining {subject}. Make it enthusiastic and welcoming."
        ),
        Category::FollowUp => format!(
            "Write a short, personalized follow-up message for a customer named {name} about \
{subject}. Make it friendly and show you care about their experience."
        ),
        Category::General => format!(
            "Write a short, personalized message for a customer named {name} about {subject}. \
Make it warm and professional."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thank_you_prompt_is_warm_and_specific() {
        let prompt = build_prompt(Category::ThankYou, "Maria", "a ceramic mug");
        assert!(prompt.contains("Maria"));
        assert!(prompt.contains("ceramic mug"));
        assert!(prompt.contains("short"));
        assert!(prompt.contains("thank-you"));
        assert!(prompt.contains("warm and specific"));
    }

    #[test]
    fn apology_prompt_takes_responsibility() {
        let prompt = build_prompt(Category::Apology, "Sam", "a late shipment");
        assert!(prompt.contains("Sam"));
        assert!(prompt.contains("late shipment"));
        assert!(prompt.contains("sincere"));
        assert!(prompt.contains("taking responsibility"));
    }

    #[test]
    fn welcome_and_follow_up_prompts_set_their_tone() {
        let welcome = build_prompt(Category::Welcome, "Lee", "Plan X");
        assert!(welcome.contains("welcome message"));
        assert!(welcome.contains("enthusiastic"));
        assert!(welcome.contains("joining Plan X"));

        let follow_up = build_prompt(Category::FollowUp, "Ana", "your new bike");
        assert!(follow_up.contains("follow-up"));
        assert!(follow_up.contains("friendly"));
        assert!(follow_up.contains("Ana"));
    }

    #[test]
    fn general_prompt_is_generic() {
        let prompt = build_prompt(Category::General, "Kim", "the workshop");
        assert!(prompt.contains("personalized message for a customer named Kim"));
        assert!(prompt.contains("about the workshop"));
        assert!(prompt.contains("warm and professional"));
    }

    #[test]
    fn inputs_are_embedded_verbatim() {
        let name = "O'Brien & {Co}";
        let subject = "100% \"organic\" tea";
        for category in Category::ALL {
            let prompt = build_prompt(category, name, subject);
            assert!(prompt.contains(name), "{category:?} prompt lost the name");
            assert!(prompt.contains(subject), "{category:?} prompt lost the subject");
        }
    }
}
