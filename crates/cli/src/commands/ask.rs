use anyhow::Result;

use super::build_chat_service;

/// Prints the provider's reply, or the local fallback answer when the
/// provider cannot be used.
pub(crate) async fn run(message: &str, context: &str) -> Result<()> {
    let chat = build_chat_service()?;
    match chat.ask(message, context).await {
        Ok(reply) => println!("{}", reply.reply),
        Err(e) => match e.fallback() {
            Some(fallback) => {
                eprintln!("{e}");
                println!("{fallback}");
            },
            None => return Err(e.into()),
        },
    }
    Ok(())
}
