//! Interactive chat session.
//!
//! Reads queries in a loop, keeps the visible transcript, and hands each
//! reply to the injected voice output (the terminal front end has none,
//! so [`NoVoice`] drops it).

use dialoguer::Input;
use urban_pulse_assistant::transcript::Transcript;
use urban_pulse_assistant::voice::{NoVoice, VoiceOutput};
use urban_pulse_assistant::Assistant;

/// Runs the interactive chat loop until the user types `exit` or `quit`.
///
/// # Errors
///
/// Returns an error if assistant construction or terminal input fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let assistant = Assistant::from_registry()?;
    let voice = NoVoice;
    let mut transcript = Transcript::new();

    println!("UrbanPulse assistant. Ask about air quality or traffic; type 'exit' to leave.");
    println!();

    loop {
        let query: String = Input::new().with_prompt("you").interact_text()?;
        let trimmed = query.trim();

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        let seq = transcript.push_user(trimmed);
        let text = assistant.respond(trimmed).await;

        // The loop is sequential, so the reply is never stale here; the
        // guard matters for front ends that fire queries concurrently.
        if transcript.push_assistant(seq, text.clone()) {
            println!("assistant: {text}");
            println!();
            if voice.is_supported() {
                voice.speak(&text);
            }
        }
    }

    log::info!("Chat session ended with {} entries", transcript.len());
    Ok(())
}
