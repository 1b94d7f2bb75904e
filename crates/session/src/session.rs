use tokio::sync::Mutex;

use personachat_runtime::ChatMessage;

use crate::api_client::ApiClient;
use crate::form::CharacterForm;
use crate::render::TranscriptRenderer;

struct SessionInner {
    history: Vec<ChatMessage>,
    form: CharacterForm,
    renderer: Box<dyn TranscriptRenderer>,
    signed_in: bool,
}

/// One client session: the in-memory chat history, the character form, and
/// the transcript view. All mutation happens under a single lock, so
/// overlapping sends queue up instead of interleaving their
/// read-modify-write on the history.
///
/// Failures follow the client contract: logged, swallowed, no retry — a
/// failed send leaves only the user's message in the transcript.
pub struct ChatSession {
    api: ApiClient,
    inner: Mutex<SessionInner>,
}

impl ChatSession {
    pub fn new(api: ApiClient, renderer: Box<dyn TranscriptRenderer>) -> Self {
        Self {
            api,
            inner: Mutex::new(SessionInner {
                history: Vec::new(),
                form: CharacterForm::default(),
                renderer,
                signed_in: false,
            }),
        }
    }

    /// Runs when the identity becomes available; loads the latest transcript
    /// and character config exactly once per session. "Nothing stored yet"
    /// leaves the defaults in place.
    pub async fn sign_in(&self) {
        let mut inner = self.inner.lock().await;
        if inner.signed_in {
            return;
        }
        inner.signed_in = true;

        match self.api.load_chat_history().await {
            Ok(Some(history)) => {
                inner.history = history;
                let snapshot = inner.history.clone();
                inner.renderer.render(&snapshot);
            }
            Ok(None) => {}
            Err(e) => tracing::error!("[ChatSession::sign_in] failed to load chat history: {:#}", e),
        }

        match self.api.load_character_config().await {
            Ok(Some(config)) => inner.form.apply_config(&config),
            Ok(None) => {}
            Err(e) => tracing::error!("[ChatSession::sign_in] failed to load character config: {:#}", e),
        }
    }

    /// Appends the user message, asks the proxy for a completion over the
    /// entire accumulated history, appends the reply, re-renders, then
    /// flushes the full history as a new record.
    pub async fn send(&self, text: &str, max_tokens: u32) {
        if text.is_empty() {
            return;
        }

        let mut inner = self.inner.lock().await;
        inner.history.push(ChatMessage::user(text));
        let snapshot = inner.history.clone();
        inner.renderer.render(&snapshot);

        let reply = match self.api.chat_completion(&snapshot, max_tokens, None).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("[ChatSession::send] completion failed: {:#}", e);
                return;
            }
        };
        if !reply.reasoning.is_empty() {
            tracing::debug!("[ChatSession::send] reasoning trace: {}", reply.reasoning);
        }

        inner.history.push(ChatMessage::assistant(reply.content));
        let snapshot = inner.history.clone();
        inner.renderer.render(&snapshot);

        // the transcript already shows the exchange; a failed flush just
        // means no new record exists
        if let Err(e) = self.api.save_chat_history(&snapshot).await {
            tracing::warn!("[ChatSession::send] failed to persist history: {:#}", e);
        }
    }

    /// Saves the character form through the API; blank optional fields are
    /// dropped, a blank name is rejected server-side.
    pub async fn save_character(&self) {
        let config = self.inner.lock().await.form.to_config();
        match self.api.save_character_config(&config).await {
            Ok(config_id) => {
                tracing::info!("[ChatSession::save_character] saved config {}", config_id)
            }
            Err(e) => tracing::error!("[ChatSession::save_character] failed to save config: {:#}", e),
        }
    }

    pub async fn update_form(&self, update: impl FnOnce(&mut CharacterForm)) {
        update(&mut self.inner.lock().await.form);
    }

    pub async fn form(&self) -> CharacterForm {
        self.inner.lock().await.form.clone()
    }

    pub async fn history(&self) -> Vec<ChatMessage> {
        self.inner.lock().await.history.clone()
    }
}
