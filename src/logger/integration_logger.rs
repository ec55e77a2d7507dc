use crate::structs::integration_state::IntegrationState;
use crate::structs::stored_state::StoredState;
use crate::structs::webhook_spec::WebhookSpec;

pub struct IntegrationLogger;

impl IntegrationLogger {
    pub fn print_state(stored: &StoredState) {
        println!("\n🔗 Webhook integration ({})", stored.id);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Refreshed at: {}", stored.refreshed_at.to_rfc3339());
        Self::print_hooks(&stored.integration);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    pub fn print_hooks(state: &IntegrationState) {
        if state.is_empty() {
            println!("  (no hooks)");
            return;
        }

        for (index, hook) in state.hooks.iter().enumerate() {
            Self::print_hook(index + 1, hook);
        }
    }

    fn print_hook(position: usize, hook: &WebhookSpec) {
        println!("\n  {}. {} -> {}", position, hook.name, hook.url);

        if let Some(use_custom_payload) = hook.use_custom_payload {
            println!("     use_custom_payload: {}", use_custom_payload);
        }
        if let Some(payload) = &hook.custom_payload {
            println!("     custom_payload: {}", payload.replace('\n', "\n                     "));
        }
        if let Some(encode_as_form) = hook.encode_as_form {
            println!("     encode_as_form: {}", encode_as_form);
        }
        for (key, value) in hook.headers.iter().flatten() {
            println!("     header {}: {}", key, value);
        }
    }

    /// Prints hooks present on only one side, plus those that differ.
    pub fn print_plan(prior: &IntegrationState, proposed: &[WebhookSpec]) {
        for hook in proposed {
            match prior.hook(&hook.name) {
                None => println!("\x1b[32m+ {}\x1b[0m", hook.name),
                Some(existing) if existing != hook => println!("\x1b[33m~ {} (forces replacement)\x1b[0m", hook.name),
                Some(_) => println!("  {}", hook.name),
            }
        }

        for hook in &prior.hooks {
            if !proposed.iter().any(|p| p.name == hook.name) {
                println!("\x1b[31m- {}\x1b[0m", hook.name);
            }
        }
    }
}
