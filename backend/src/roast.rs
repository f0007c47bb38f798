use crate::error::{RoastError, RoastResult};
use crate::fallback::FallbackRoaster;
use crate::openai::OpenAiGenerator;
use crate::personas::PersonaRegistry;
use crate::scorer;
use shared::models::Character;

const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Where the orchestrator looks for provider credentials. Consulted fresh on
/// every request, so a key added or removed at runtime takes effect without a
/// restart. Tests swap in a stub.
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

/// Reads `OPENAI_API_KEY` from the process environment. An empty value counts
/// as absent.
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty())
    }
}

/// A finished critique with its derived severity.
#[derive(Clone, Debug, PartialEq)]
pub struct Roast {
    pub text: String,
    pub severity: f64,
    pub character_id: String,
}

/// The two generation strategies, chosen per request by credential presence.
enum GenerationPath {
    External(String),
    Fallback,
}

pub struct Roaster {
    registry: PersonaRegistry,
    credentials: Box<dyn CredentialSource>,
    external: OpenAiGenerator,
    fallback: FallbackRoaster,
}

impl Roaster {
    pub fn new(
        registry: PersonaRegistry,
        credentials: Box<dyn CredentialSource>,
        external: OpenAiGenerator,
        fallback: FallbackRoaster,
    ) -> Self {
        Self {
            registry,
            credentials,
            external,
            fallback,
        }
    }

    pub fn characters(&self) -> Vec<Character> {
        self.registry.characters()
    }

    /// Validate, resolve the persona, generate through whichever path is
    /// configured, then score. A provider failure aborts the request; the
    /// pool is only used when no credential is present at request start.
    pub async fn produce_roast(&self, code: &str, character_id: &str) -> RoastResult<Roast> {
        if code.is_empty() || character_id.is_empty() {
            return Err(RoastError::InvalidRequest(
                "Code and character are required".to_string(),
            ));
        }

        let (resolved_id, persona) = self.registry.resolve(character_id);

        let path = match self.credentials.api_key() {
            Some(key) => GenerationPath::External(key),
            None => GenerationPath::Fallback,
        };

        let text = match path {
            GenerationPath::External(key) => {
                tracing::debug!(character = resolved_id, "generating roast via provider");
                self.external.generate(&key, &persona, code).await?
            }
            GenerationPath::Fallback => {
                tracing::debug!(character = resolved_id, "generating roast from fallback pool");
                self.fallback.pick(&persona).await
            }
        };

        let severity = scorer::score(&text);

        Ok(Roast {
            text,
            severity,
            character_id: resolved_id.to_string(),
        })
    }
}
