/*!
# Wizard CLI Demo

Terminal driver for the Connect questionnaire. Stands in for the
rendering collaborator: it draws the current step, reports field input
back to the session, and honors the navigation results it gets.

Commands at any field prompt:
- `:b` go back one step
- `:r` restart the flow (clears the persisted snapshot)
- `:q` quit (state stays persisted; rerun to resume)

Set `WEBHOOK_URL` to post the submission to a real endpoint; without it
the payload is swallowed by the null sink.
*/

use anyhow::Result;
use leadflow_core::prelude::*;
use leadflow_runtime::prelude::*;
use std::io::{BufRead, Write};
use std::sync::Arc;

enum Input {
    Line(String),
    Back,
    Restart,
    Quit,
}

fn prompt(label: &str) -> Result<Input> {
    print!("{label}> ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(match line.trim() {
        ":b" => Input::Back,
        ":r" => Input::Restart,
        ":q" => Input::Quit,
        other => Input::Line(other.to_string()),
    })
}

fn render_step(session: &FlowSession) {
    let controller = session.controller();
    let step = controller.current_step();
    let cursor = controller.cursor();

    println!();
    println!(
        "--- [{}/{}] {} ---",
        cursor.current + 1,
        controller.sequence().len(),
        step.id
    );

    match &step.body {
        StepBody::Intro => {
            println!("Welcome. This short form connects you with the network.");
        }
        StepBody::Content { question, .. } => println!("{question}"),
        StepBody::Terminal => {
            println!("Thank you. We'll be in touch soon.");
        }
    }
}

/// Collect input for every field on the current step. Returns `false`
/// when the user asked to leave the step (back/restart/quit handled by
/// the caller via the returned command).
async fn fill_fields(session: &mut FlowSession) -> Result<Option<Input>> {
    let fields = session.controller().current_step().fields().to_vec();

    for field in fields {
        let label = field.label.clone().unwrap_or_else(|| field.key.clone());
        let suffix = if field.required { "" } else { " (optional)" };

        match &field.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::TextArea => {
                if let Some(existing) = session.controller().answers().scalar(&field.key) {
                    if !existing.is_empty() {
                        println!("{label}: {existing} (Enter to keep)");
                    }
                }
                match prompt(&format!("{label}{suffix}"))? {
                    Input::Line(text) if text.is_empty() => {}
                    Input::Line(text) => session.answer(field.key.clone(), text).await,
                    other => return Ok(Some(other)),
                }
            }
            FieldKind::Choice { options } | FieldKind::MultiChoice { options } => {
                for (i, option) in options.iter().enumerate() {
                    println!("  {}. {option}", i + 1);
                }
                let multi = matches!(field.kind, FieldKind::MultiChoice { .. });
                let hint = if multi { "numbers, comma-separated" } else { "number" };
                match prompt(&format!("{label}{suffix} [{hint}]"))? {
                    Input::Line(text) if text.is_empty() => {}
                    Input::Line(text) => {
                        let picked: Vec<String> = text
                            .split(',')
                            .filter_map(|part| part.trim().parse::<usize>().ok())
                            .filter_map(|n| options.get(n.wrapping_sub(1)).cloned())
                            .collect();
                        if multi {
                            session.answer(field.key.clone(), Answer::List(picked)).await;
                        } else if let Some(choice) = picked.into_iter().next() {
                            session.answer(field.key.clone(), choice).await;
                        }
                    }
                    other => return Ok(Some(other)),
                }
            }
            FieldKind::MultiText { max_entries } => {
                println!("{label}{suffix} (up to {max_entries}, empty line to stop)");
                for index in 0..*max_entries {
                    match prompt(&format!("  {} {}", field.key, index + 1))? {
                        Input::Line(text) if text.is_empty() => break,
                        Input::Line(text) => {
                            session.edit_list_entry(&field.key, index, text).await;
                        }
                        other => return Ok(Some(other)),
                    }
                }
            }
        }
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store: Arc<dyn SnapshotStore> = Arc::new(FileStore::in_dir(std::env::temp_dir()));
    let sink: Arc<dyn SubmissionSink> = match std::env::var("WEBHOOK_URL") {
        Ok(url) => Arc::new(WebhookSink::new(url)),
        Err(_) => Arc::new(NullSink),
    };

    let mut session = FlowSession::start(connect_catalog(), store, sink).await;
    println!("=== Connect ===");

    loop {
        render_step(&session);

        if session.controller().is_finished() {
            match prompt("restart? [y/N]")? {
                Input::Line(answer) if answer.eq_ignore_ascii_case("y") => {
                    session.restart().await;
                    continue;
                }
                _ => break,
            }
        }

        if let Some(command) = fill_fields(&mut session).await? {
            match command {
                Input::Back => {
                    session.retreat().await;
                }
                Input::Restart => session.restart().await,
                Input::Quit => break,
                Input::Line(_) => {}
            }
            continue;
        }

        if !session.controller().current_is_valid() {
            println!("(some required fields are still empty)");
            continue;
        }

        let submitting = session
            .controller()
            .current_step()
            .button_label
            .as_deref()
            == Some("Submit");

        let nav = if submitting {
            session.submit().await
        } else {
            session.advance().await
        };

        if let Nav::Blocked(reason) = nav {
            println!("(cannot continue: {reason:?})");
        }
    }

    Ok(())
}
