use crate::cli::Commands;
use brev_core::{load_config, ExpandRequest, Expander, Result};

pub fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Expand { lbuffer, rbuffer } => handle_expand(lbuffer, rbuffer),
        Commands::List => handle_list(),
        Commands::Init => handle_init(),
    }
}

/// Expand the current buffer and print shell-eval-able assignments for the
/// readline integration.
fn handle_expand(lbuffer: String, rbuffer: String) -> Result<()> {
    let config = load_config()?;
    let expander = Expander::new(&config);
    let result = expander.expand(ExpandRequest {
        left_buffer: lbuffer,
        right_buffer: rbuffer,
    })?;

    let full_line = format!("{}{}", result.new_left_buffer, result.new_right_buffer);
    println!("READLINE_LINE='{}'", shell_quote(&full_line));
    println!("READLINE_POINT={}", result.cursor_offset);
    if result.set_cursor {
        println!("SET_CURSOR=1");
    }

    Ok(())
}

fn handle_list() -> Result<()> {
    let config = load_config()?;

    if config.abbreviations.is_empty() {
        println!("No abbreviations configured.");
        return Ok(());
    }

    for abbr in &config.abbreviations {
        if !abbr.trigger().is_empty() {
            println!("{:<10} -> {}", abbr.trigger(), abbr.snippet);
        } else if let Some(pattern) = abbr.regex() {
            println!("{:<10} -> {} (regex: {})", "[regex]", abbr.snippet, pattern);
        }
    }

    Ok(())
}

fn handle_init() -> Result<()> {
    print!("{}", include_str!("shell/init.bash"));
    Ok(())
}

/// Make a string safe for embedding inside single quotes in bash.
fn shell_quote(s: &str) -> String {
    s.replace('\'', "'\"'\"'")
}
