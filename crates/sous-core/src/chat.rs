//! Chat conversation state.
//!
//! A [`Conversation`] holds the transcript and the recipe card currently on
//! screen. A turn is split in two so the UI can await the backend in between:
//! [`Conversation::begin_turn`] records the user's message and builds the
//! request, [`Conversation::finish_turn`] records the reply or the failure.

use std::future::Future;

use crate::config::{BACKEND_ERROR_REPLY, GREETING};
use crate::error::FetchError;
use crate::protocol::{AskRequest, AskResponse};
use crate::recipe::Recipe;

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Anything that can answer an [`AskRequest`].
///
/// Implemented over HTTP in the browser and by stubs in tests.
pub trait RecipeBackend {
    fn ask(&self, request: AskRequest) -> impl Future<Output = Result<AskResponse, FetchError>>;
}

/// Transcript plus the recipe card currently displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    recipe: Option<Recipe>,
    pending: bool,
}

impl Conversation {
    /// New conversation opened by the assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            recipe: None,
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    /// Whether a request is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Show a recipe card without a backend round trip (e.g. a saved recipe).
    pub fn show_recipe(&mut self, recipe: Recipe) {
        self.recipe = Some(recipe);
    }

    /// Record the user's message and build the backend request.
    ///
    /// Input is trimmed. Returns `None` without touching the transcript when
    /// the input is blank or another turn is still pending.
    pub fn begin_turn(&mut self, input: &str, session_id: &str) -> Option<AskRequest> {
        let message = input.trim();
        if message.is_empty() || self.pending {
            return None;
        }

        self.messages.push(ChatMessage::user(message));
        self.pending = true;
        Some(AskRequest::new(message, session_id))
    }

    /// Record the outcome of the pending turn.
    ///
    /// A reply is appended as an assistant message; a recipe in the reply
    /// replaces the current card. A failure appends the generic error reply
    /// and is handed back so the caller can log it.
    pub fn finish_turn(
        &mut self,
        outcome: Result<AskResponse, FetchError>,
    ) -> Option<FetchError> {
        self.pending = false;
        match outcome {
            Ok(response) => {
                self.messages.push(ChatMessage::assistant(response.reply));
                if let Some(recipe) = response.recipe {
                    self.recipe = Some(recipe);
                }
                None
            }
            Err(e) => {
                self.messages.push(ChatMessage::assistant(BACKEND_ERROR_REPLY));
                Some(e)
            }
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Ingredient;
    use std::cell::RefCell;

    /// Backend that replays canned outcomes and records requests.
    struct StubBackend {
        outcomes: RefCell<Vec<Result<AskResponse, FetchError>>>,
        requests: RefCell<Vec<AskRequest>>,
    }

    impl StubBackend {
        fn new(outcomes: Vec<Result<AskResponse, FetchError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into_iter().rev().collect()),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl RecipeBackend for StubBackend {
        async fn ask(&self, request: AskRequest) -> Result<AskResponse, FetchError> {
            self.requests.borrow_mut().push(request);
            self.outcomes
                .borrow_mut()
                .pop()
                .unwrap_or(Err(FetchError::Timeout))
        }
    }

    fn lasagna() -> Recipe {
        Recipe::new(
            "lasagna",
            vec![Ingredient::with_quantity("noodles", "12")],
            vec!["Bake".to_string()],
        )
    }

    /// One full turn, the way the app drives it across an await.
    async fn run_turn(
        conv: &mut Conversation,
        backend: &StubBackend,
        input: &str,
    ) -> Option<FetchError> {
        let request = conv.begin_turn(input, "sess-1")?;
        let outcome = backend.ask(request).await;
        conv.finish_turn(outcome)
    }

    fn reply(text: &str, recipe: Option<Recipe>) -> Result<AskResponse, FetchError> {
        Ok(AskResponse {
            reply: text.to_string(),
            recipe,
        })
    }

    #[test]
    fn test_starts_with_greeting() {
        let conv = Conversation::new();
        assert_eq!(conv.messages(), [ChatMessage::assistant(GREETING)]);
        assert!(conv.recipe().is_none());
        assert!(!conv.is_pending());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut conv = Conversation::new();
        assert_eq!(conv.begin_turn("   \n", "s1"), None);
        assert_eq!(conv.messages().len(), 1);
        assert!(!conv.is_pending());
    }

    #[test]
    fn test_begin_turn_trims_and_builds_request() {
        let mut conv = Conversation::new();
        let request = conv.begin_turn("  recipe for lasagna ", "s1").unwrap();

        assert_eq!(request, AskRequest::new("recipe for lasagna", "s1"));
        assert_eq!(conv.messages()[1], ChatMessage::user("recipe for lasagna"));
        assert!(conv.is_pending());
    }

    #[test]
    fn test_second_turn_waits_for_first() {
        let mut conv = Conversation::new();
        assert!(conv.begin_turn("one", "s1").is_some());
        assert!(conv.begin_turn("two", "s1").is_none());
        assert_eq!(conv.messages().len(), 2);
    }

    #[test]
    fn test_reply_with_recipe_sets_card() {
        let mut conv = Conversation::new();
        conv.begin_turn("recipe for lasagna", "s1");
        let err = conv.finish_turn(reply("Here's a recipe for lasagna.", Some(lasagna())));

        assert!(err.is_none());
        assert_eq!(
            conv.messages().last(),
            Some(&ChatMessage::assistant("Here's a recipe for lasagna."))
        );
        assert_eq!(conv.recipe(), Some(&lasagna()));
        assert!(!conv.is_pending());
    }

    #[test]
    fn test_reply_without_recipe_keeps_card() {
        let mut conv = Conversation::new();
        conv.show_recipe(lasagna());
        conv.begin_turn("thanks", "s1");
        conv.finish_turn(reply("You're welcome!", None));
        assert_eq!(conv.recipe(), Some(&lasagna()));
    }

    #[test]
    fn test_failure_appends_error_reply() {
        let mut conv = Conversation::new();
        conv.begin_turn("hello", "s1");
        let err = conv.finish_turn(Err(FetchError::HttpError(500)));

        assert_eq!(err, Some(FetchError::HttpError(500)));
        assert_eq!(
            conv.messages().last(),
            Some(&ChatMessage::assistant(BACKEND_ERROR_REPLY))
        );
        assert!(!conv.is_pending());
        // Still usable after a failure
        assert!(conv.begin_turn("again", "s1").is_some());
    }

    #[tokio::test]
    async fn test_send_round_trip() {
        let backend = StubBackend::new(vec![
            reply("Here's a recipe for lasagna.", Some(lasagna())),
            Err(FetchError::NetworkError("connection refused".into())),
        ]);
        let mut conv = Conversation::new();

        assert_eq!(run_turn(&mut conv, &backend, "recipe for lasagna").await, None);
        assert_eq!(
            run_turn(&mut conv, &backend, "and dessert?").await,
            Some(FetchError::NetworkError("connection refused".into()))
        );

        let requests = backend.requests.borrow();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| r.session_id == "sess-1"));

        let texts: Vec<&str> = conv.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            [
                GREETING,
                "recipe for lasagna",
                "Here's a recipe for lasagna.",
                "and dessert?",
                BACKEND_ERROR_REPLY,
            ]
        );
        assert_eq!(conv.recipe(), Some(&lasagna()));
    }

    #[tokio::test]
    async fn test_timeout_ends_turn_with_error_reply() {
        // No canned outcomes left: the stub answers with a timeout
        let backend = StubBackend::new(vec![]);
        let mut conv = Conversation::new();

        let err = run_turn(&mut conv, &backend, "recipe for soup").await;
        assert_eq!(err, Some(FetchError::Timeout));
        assert_eq!(
            conv.messages().last(),
            Some(&ChatMessage::assistant(BACKEND_ERROR_REPLY))
        );
        assert!(!conv.is_pending());
    }

    #[tokio::test]
    async fn test_send_blank_skips_backend() {
        let backend = StubBackend::new(vec![]);
        let mut conv = Conversation::new();

        assert_eq!(run_turn(&mut conv, &backend, "  ").await, None);
        assert!(backend.requests.borrow().is_empty());
        assert_eq!(conv.messages().len(), 1);
    }
}
