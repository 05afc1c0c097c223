//! AI round-trip through the dispatch: spawn on the runtime, receive, apply.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hexvibe_core::{HexColor, MemoryStorage, PaletteSession};
use hexvibe_llms::{GenerateRequest, GenerateResponse, Headers, PaletteParaphraser, Provider, Usage};
use hexvibe_tui::keymap::Action;
use hexvibe_tui::run::{AiDispatch, apply_action, finish_ai};
use hexvibe_tui::state::{Focus, SessionStorage, TuiState};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct FixedProvider {
    reply: &'static str,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Provider for FixedProvider {
    fn provider_id(&self) -> &str {
        "fixed"
    }

    fn build_headers(&self, _custom_headers: Option<&Headers>) -> Headers {
        Headers::new()
    }

    fn default_model(&self) -> &str {
        "fixed-1"
    }

    async fn generate(&self, _request: GenerateRequest) -> hexvibe_llms::Result<GenerateResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GenerateResponse {
            text: self.reply.to_string(),
            usage: Usage::default(),
            finish_reason: Some("stop".to_string()),
            metadata: None,
        })
    }
}

fn state() -> TuiState {
    let mut rng = StdRng::seed_from_u64(3);
    let storage: SessionStorage = Box::new(MemoryStorage::new());
    let session = PaletteSession::open(storage, &mut rng);
    TuiState::with_rng(session, rng)
}

fn dispatch(reply: &'static str, calls: Arc<AtomicUsize>) -> AiDispatch {
    let provider = Arc::new(FixedProvider { reply, calls });
    let paraphraser = PaletteParaphraser::with_default_model(provider);
    AiDispatch::new(Some(paraphraser), tokio::runtime::Handle::current())
}

async fn wait_for_outcome(ai: &mut AiDispatch) -> hexvibe_core::AiOutcome {
    for _ in 0..200 {
        if let Some(outcome) = ai.try_recv() {
            return outcome;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("AI outcome never arrived");
}

fn hex(s: &str) -> HexColor {
    s.parse().unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn submit_applies_palette_and_blocks_second_request() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut ai = dispatch(r##"{"palette": ["#112233", "aabbcc"], "themeName": "Night"}"##, calls.clone());
    let mut s = state();
    assert_eq!(ai.label().as_deref(), Some("fixed · fixed-1"));

    apply_action(&mut s, Action::ToggleLock(1), &mut ai);
    let locked = s.session.palette().slots()[1].hex;

    s.focus = Focus::Prompt;
    for c in "deep night".chars() {
        apply_action(&mut s, Action::PromptInsert(c), &mut ai);
    }
    apply_action(&mut s, Action::SubmitPrompt, &mut ai);
    assert!(s.session.is_ai_loading());

    apply_action(&mut s, Action::SubmitPrompt, &mut ai);
    assert_eq!(s.status, "AI request already in progress");

    let outcome = wait_for_outcome(&mut ai).await;
    finish_ai(&mut s, outcome);

    assert!(!s.session.is_ai_loading());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let slots = s.session.palette().slots();
    assert_eq!(slots[0].hex, hex("#112233"));
    assert_eq!(slots[1].hex, locked);
    assert_eq!(slots[2].hex, hex("#AABBCC"));
    assert_eq!(s.session.history().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unusable_reply_leaves_palette_untouched() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut ai = dispatch("I cannot help with colors today.", calls);
    let mut s = state();
    let before = s.session.palette().clone();

    s.prompt_buffer = "anything".to_string();
    apply_action(&mut s, Action::SubmitPrompt, &mut ai);
    let outcome = wait_for_outcome(&mut ai).await;
    finish_ai(&mut s, outcome);

    assert_eq!(s.session.palette(), &before);
    assert!(s.session.history().is_empty());
    assert!(s.status_is_error);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn blank_prompt_never_reaches_provider() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut ai = dispatch("[]", calls.clone());
    let mut s = state();
    s.prompt_buffer = "   ".to_string();
    apply_action(&mut s, Action::SubmitPrompt, &mut ai);
    assert!(!s.session.is_ai_loading());
    assert_eq!(s.status, "Describe a vibe first");
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
