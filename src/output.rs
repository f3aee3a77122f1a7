//! Output rendering abstraction for gitgud.
//!
//! The [`Renderer`] trait decouples LLM stream consumption from the display
//! layer. [`StdoutRenderer`] prints tokens and tool events live;
//! [`CaptureRenderer`] accumulates silently for one-shot prompts like the
//! commit summary. Both share the same accumulation buffer behavior.

use colored::Colorize;
use std::io::{self, Write};

/// Trait for rendering a streamed LLM reply.
pub trait Renderer {
    /// Render a single text fragment as it arrives.
    fn render_token(&mut self, token: &str);

    /// Called when the LLM requests a tool invocation.
    fn tool_start(&mut self, name: &str, arguments: &serde_json::Value);

    /// Called when a tool result comes back.
    fn tool_result(&mut self, name: &str, result: &str);

    /// Called when the full response is complete.
    fn render_done(&mut self);

    /// Called when an error occurs during streaming.
    fn render_error(&mut self, err: &str);
}

/// Renders streaming LLM output directly to stdout.
///
/// Each token is printed immediately with an explicit flush so the user
/// sees a "typing" effect. Tool events are shown as dimmed one-liners.
pub struct StdoutRenderer;

impl StdoutRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for StdoutRenderer {
    fn render_token(&mut self, token: &str) {
        print!("{}", token);
        // Flush immediately so each token appears as it arrives
        io::stdout().flush().ok();
    }

    fn tool_start(&mut self, name: &str, arguments: &serde_json::Value) {
        println!();
        println!("{} {}({})", "⚙".cyan(), name.cyan(), arguments.to_string().dimmed());
    }

    fn tool_result(&mut self, name: &str, result: &str) {
        let line_count = result.lines().count();
        println!(
            "{}",
            format!("  {} → {} line(s)", name, line_count).dimmed()
        );
    }

    fn render_done(&mut self) {
        println!();
    }

    fn render_error(&mut self, err: &str) {
        eprintln!();
        eprintln!("{} {}", "error:".red().bold(), err);
    }
}

/// Accumulates the streamed reply without printing anything.
///
/// Used by the commit summary step, which needs the full text but should
/// not echo partial tokens to the terminal.
pub struct CaptureRenderer {
    buffer: String,
}

impl CaptureRenderer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Consumes the renderer and returns the accumulated text.
    pub fn into_text(self) -> String {
        self.buffer
    }
}

impl Renderer for CaptureRenderer {
    fn render_token(&mut self, token: &str) {
        self.buffer.push_str(token);
    }

    fn tool_start(&mut self, _name: &str, _arguments: &serde_json::Value) {}

    fn tool_result(&mut self, _name: &str, _result: &str) {}

    fn render_done(&mut self) {}

    fn render_error(&mut self, _err: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_renderer_accumulates_tokens() {
        let mut renderer = CaptureRenderer::new();
        renderer.render_token("add ");
        renderer.render_token("foo");
        renderer.render_done();
        assert_eq!(renderer.into_text(), "add foo");
    }
}
