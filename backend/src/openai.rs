use crate::error::{RoastError, RoastResult};
use crate::personas::Persona;
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
};

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const MODEL: &str = "gpt-4o-mini";
/// High randomness: variety matters more than reproducibility here.
const TEMPERATURE: f32 = 0.9;
const MAX_TOKENS: u32 = 300;

/// Fixed task framing appended to every persona's style instruction.
const TASK_FRAMING: &str = "Your task: Review the following code and roast it mercilessly in character. Be funny, creative, and brutal but keep it PG-13.
- Point out specific issues you see in the code
- Use the character's unique style and catchphrases
- Keep the roast between 2-4 sentences
- Be entertaining above all else";

/// External generation path. The client is rebuilt per call because the
/// credential is re-read per request, not fixed at startup.
pub struct OpenAiGenerator {
    api_base: String,
}

impl OpenAiGenerator {
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the generator at another OpenAI-compatible endpoint.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Single attempt, no retry. Transport failures, non-success statuses and
    /// empty completions all surface as `RoastError::Generation`.
    pub async fn generate(
        &self,
        api_key: &str,
        persona: &Persona,
        code: &str,
    ) -> RoastResult<String> {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(self.api_base.clone());
        let client = Client::with_config(config);

        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(format!("{}\n\n{}", persona.style_instruction, TASK_FRAMING))
            .build()
            .map_err(|e| RoastError::Generation(e.to_string()))?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(format!("Please roast this code:\n\n{code}"))
            .build()
            .map_err(|e| RoastError::Generation(e.to_string()))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(MODEL)
            .messages(vec![
                ChatCompletionRequestMessage::System(system),
                ChatCompletionRequestMessage::User(user),
            ])
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .build()
            .map_err(|e| RoastError::Generation(e.to_string()))?;

        let response = client
            .chat()
            .create(request)
            .await
            .map_err(|e| RoastError::Generation(e.to_string()))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| RoastError::Generation("provider returned an empty completion".into()))
    }
}

impl Default for OpenAiGenerator {
    fn default() -> Self {
        Self::new()
    }
}
