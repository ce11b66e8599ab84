//! Prompt assembly for model calls.

/// Instructions prepended to every model request.
pub const SYSTEM_PROMPT: &str = "\
You are an expert Arch Linux assistant. Your role is to:
1. Help users troubleshoot Arch Linux issues
2. Give accurate, safe advice grounded in official Arch Wiki documentation
3. Always warn before potentially destructive operations (rm -rf, dd, filesystem changes)
4. Point users at the relevant Arch Wiki pages for detail
5. Use pacman, systemd, and other Arch-specific tools correctly
6. Never suggest commands that could break the system without a clear warning

CRITICAL: Prioritize system stability. For complex issues, direct users to official documentation.
When suggesting commands, explain what they do before the user runs them.";

/// Assemble the full prompt from the question and optional wiki context.
pub fn build_prompt(question: &str, wiki_context: Option<&str>) -> String {
    let mut prompt = String::from(SYSTEM_PROMPT);

    if let Some(context) = wiki_context {
        prompt.push_str("\n\nWiki context:\n");
        prompt.push_str(context);
    }

    prompt.push_str("\n\nUser question: ");
    prompt.push_str(question);
    prompt.push_str(
        "\n\nProvide a helpful, accurate response. Include relevant commands with \
         explanations, and reference Arch Wiki pages when applicable.",
    );

    prompt
}
