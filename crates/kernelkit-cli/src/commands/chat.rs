//! Chat command handler

use crate::error::CliError;
use kernelkit::prelude::*;
use kernelkit::{ChatCompletionService, ProviderPolicy, ReqwestTransportFactory};
use rustyline::DefaultEditor;
use std::path::Path;
use tracing::debug;

pub async fn run_chat(
    settings_path: &Path,
    policy: ProviderPolicy,
    initial_message: Option<String>,
    once: bool,
    system_prompt: Option<String>,
) -> Result<(), CliError> {
    if once && initial_message.is_none() {
        return Err(CliError::InvalidInput(
            "Message is required in once mode".to_string(),
        ));
    }

    let kernel = KernelFactory::new(
        FileSettings::new(settings_path),
        ReqwestTransportFactory::new(),
    )
    .with_policy(policy)
    .build_kernel()?;
    debug!(kernel_id = %kernel.id(), "Kernel built for chat session");

    let mut history = match system_prompt {
        Some(prompt) => ChatHistory::with_system(prompt),
        None => ChatHistory::new(),
    };

    // Only show header in interactive mode
    if !once {
        let model = kernel.chat_completion()?.model_id().to_string();
        println!("🤖 kernelkit chat ({}) - Type 'exit' to quit", model);
        println!("================================");
    }

    if let Some(msg) = initial_message {
        if !once {
            println!("You: {}", msg);
        }
        history.add_user(msg);
        let reply = kernel.complete(&history).await?;

        // In once mode, just print the reply without "Bot:" prefix
        if once {
            println!("{}", reply.content);
            return Ok(());
        }
        println!("Bot: {}", reply.content);
        history.push(reply);
    }

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("🤖 > ") {
            Ok(line) => {
                let input = line.trim();

                if input == "exit" || input == "quit" {
                    println!("Goodbye! 👋");
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                rl.add_history_entry(&line).ok();

                history.add_user(input);
                match kernel.complete(&history).await {
                    Ok(reply) => {
                        println!("Bot: {}", reply.content);
                        history.push(reply);
                    }
                    Err(e) => {
                        // keep the session alive; drop the unanswered turn
                        eprintln!("⚠️  {}", e);
                        history.pop();
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("\nCtrl-C received. Use 'exit' to quit.");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("\nGoodbye! 👋");
                break;
            }
            Err(err) => {
                return Err(err.into());
            }
        }
    }

    Ok(())
}
