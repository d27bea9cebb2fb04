//! Interactive chat with the Terraria Helper.
//!
//! This binary is a terminal rendition of the helper's web widget: a welcome
//! screen followed by the message thread.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a local service on http://localhost:8000
//! terrachat
//!
//! # Point at a deployed service
//! TERRACHAT_API_URL=https://helper.example.com terrachat
//! terrachat --api-url https://helper.example.com
//!
//! # Disable colors (useful for piping output)
//! terrachat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear the conversation and start a new session
//! - `/search <query>` - Search the knowledge base
//! - `/ask <n>` - Send a popular question
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use terrachat::ChatClient;
use terrachat::chat::{
    ChatArgs, ChatCommand, ChatConfig, ChatSession, PlainTextRenderer, Renderer, SendOutcome,
    help_text, parse_command, welcome,
};

/// Main entry point for the terrachat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("terrachat [OPTIONS]");
    let config = ChatConfig::from(args);

    let client = ChatClient::with_options(Some(config.api_url.clone()), Some(config.timeout))?;
    let mut session = ChatSession::new(client);
    let mut renderer = PlainTextRenderer::with_color(config.use_color);
    let mut rl = DefaultEditor::new()?;

    if config.show_welcome {
        print_welcome();
    }
    println!("Connected to {}", session.service().base_url());
    println!("Type /help for commands, /quit to exit\n");
    for message in session.messages() {
        renderer.print_message(message);
    }

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line.as_str());

                if let Some(cmd) = parse_command(&line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::Clear => {
                            session.clear_messages();
                            renderer.print_info("Conversation cleared.");
                            for message in session.messages() {
                                renderer.print_message(message);
                            }
                        }
                        ChatCommand::Search(query) => {
                            match session.service().search(&query).await {
                                Ok(result) if result.is_empty() => {
                                    renderer.print_info(&format!("No results for {:?}.", result.query))
                                }
                                Ok(result) => {
                                    renderer.print_info(&format!("Results for {:?}:", result.query));
                                    for item in &result.results {
                                        println!("    - {}", item);
                                    }
                                }
                                Err(err) => renderer.print_error(&format!("Search failed: {}", err)),
                            }
                        }
                        ChatCommand::Health => match session.service().health_check().await {
                            Ok(status) => renderer.print_info(&format!(
                                "Service status: {} ({})",
                                status.status, status.timestamp
                            )),
                            Err(err) => {
                                renderer.print_error(&format!("Health check failed: {}", err))
                            }
                        },
                        ChatCommand::Session => match session.session_id() {
                            Some(id) => renderer.print_info(&format!("Session: {}", id)),
                            None => renderer.print_info("No session yet."),
                        },
                        ChatCommand::History => {
                            for message in session.messages() {
                                renderer.print_message(message);
                            }
                        }
                        ChatCommand::Ask(number) => {
                            if let Some(question) = welcome::popular_question(number) {
                                println!("You: {}", question);
                                send(&mut session, question, &mut renderer).await;
                            }
                        }
                        ChatCommand::Welcome => print_welcome(),
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                send(&mut session, &line, &mut renderer).await;
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

async fn send(session: &mut ChatSession, text: &str, renderer: &mut PlainTextRenderer) {
    println!();
    if session.send_message(text, renderer).await == SendOutcome::Busy {
        renderer.print_error("Still waiting for the previous reply.");
    }
}

fn print_welcome() {
    for line in welcome::welcome_text().lines() {
        println!("  {}", line);
    }
    println!();
}
