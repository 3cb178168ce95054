//! The interactive operator console.
//!
//! A single-letter command loop: add a new complaint, process the next (most
//! severe) one, or exit.  Output here goes straight to stdout; it is the
//! operator's UI, not diagnostics.

use std::io::{Write, stdout};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::{
    base::types::{Res, Void},
    service::{classifier::ClassifierClient, queue::ComplaintStore},
};

use super::intake;

/// Run the console loop until the operator exits or stdin closes.
pub async fn run(classifier: &ClassifierClient, store: &mut ComplaintStore) -> Void {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let Some(command) = prompt(&mut lines, "\n[P]rocess Next | [A]dd New | [E]xit: ").await? else {
            break;
        };

        match command.trim().to_lowercase().as_str() {
            "a" => {
                let Some(text) = prompt(&mut lines, "Complaint text: ").await? else {
                    break;
                };

                add_complaint(text, classifier, store).await;
            }
            "p" => {
                if !process_next(store) {
                    continue;
                }

                // The handling step is display plus manual acknowledgment.
                if prompt(&mut lines, "Press Enter to mark as Resolved... ").await?.is_none() {
                    break;
                }

                println!("Resolved.");
            }
            "e" => break,
            other => println!("Unknown command: '{other}'."),
        }
    }

    Ok(())
}

/// Classify and queue one complaint, echoing the verdict to the operator.
async fn add_complaint(text: String, classifier: &ClassifierClient, store: &mut ComplaintStore) {
    println!("[System] Sending to classifier ...");

    let complaint = intake::submit_complaint(text, classifier, store).await;

    println!(" -> AI score: {}/10", complaint.severity);
    println!(" -> Reason:   {}", complaint.reasoning);
}

/// Pop and display the most severe pending complaint.
///
/// Returns false when there was nothing to process.
fn process_next(store: &mut ComplaintStore) -> bool {
    let Some(complaint) = intake::process_next(store) else {
        println!("[System] No pending complaints.");
        return false;
    };

    println!("\n!!!!! HANDLING HIGH PRIORITY !!!!!");
    println!("ID:       {}", complaint.id);
    println!("Severity: {}/10", complaint.severity);
    println!("Reason:   {}", complaint.reasoning);
    println!("Message:  {}", complaint.text);
    println!("{}", "-".repeat(40));

    true
}

/// Print a prompt and read one line; `None` means stdin closed.
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, message: &str) -> Res<Option<String>> {
    print!("{message}");
    stdout().flush()?;

    Ok(lines.next_line().await?)
}
