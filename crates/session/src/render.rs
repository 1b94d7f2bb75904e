use std::sync::{Arc, Mutex};

use personachat_runtime::ChatMessage;

/// View surface for the chat transcript. `render` receives the full history
/// and replaces whatever was shown before; there is no incremental diffing,
/// histories in this domain stay small.
pub trait TranscriptRenderer: Send {
    fn render(&mut self, history: &[ChatMessage]);
}

/// Rewrites the chat container's markup wholesale on every change. The
/// shared output handle stands in for the container node.
pub struct HtmlTranscript {
    out: Arc<Mutex<String>>,
}

impl HtmlTranscript {
    pub fn new() -> (Self, Arc<Mutex<String>>) {
        let out = Arc::new(Mutex::new(String::new()));
        (Self { out: out.clone() }, out)
    }
}

impl TranscriptRenderer for HtmlTranscript {
    fn render(&mut self, history: &[ChatMessage]) {
        let markup = history
            .iter()
            .map(|msg| format!("<div class=\"message {}\">{}</div>", msg.role, msg.content))
            .collect::<Vec<_>>()
            .join("");
        *self.out.lock().expect("transcript lock poisoned") = markup;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuilds_markup_from_scratch() {
        let (mut transcript, out) = HtmlTranscript::new();

        transcript.render(&[ChatMessage::user("hi")]);
        assert_eq!(*out.lock().unwrap(), "<div class=\"message user\">hi</div>");

        transcript.render(&[ChatMessage::user("hi"), ChatMessage::assistant("hello")]);
        assert_eq!(
            *out.lock().unwrap(),
            "<div class=\"message user\">hi</div><div class=\"message assistant\">hello</div>"
        );
    }
}
