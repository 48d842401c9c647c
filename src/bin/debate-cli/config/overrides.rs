use secrecy::SecretString;

use debate::config::{DebateSettings, Tone, TurnLimit};
use debate::{ProviderKind, Side};

use super::error::ConfigError;
use super::types::AppConfig;
use crate::args::Overrides;

const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Applies command-line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut AppConfig, overrides: &Overrides) -> Result<(), ConfigError> {
    let settings = &mut config.debate;
    if let Some(topic) = &overrides.topic {
        settings.topic = topic.clone();
    }
    if let Some(tone) = &overrides.tone {
        settings.tone = Tone::parse(tone).ok_or_else(|| ConfigError::InvalidValue {
            field: "tone",
            value: tone.clone(),
        })?;
    }
    if let Some(instruction) = &overrides.instruction {
        settings.global_instruction = instruction.clone();
    }
    if let Some(turns) = &overrides.turns {
        settings.turn_limit = TurnLimit::parse(turns);
    }

    let per_side = [
        (Side::P1, &overrides.p1_name, &overrides.p1_provider, &overrides.p1_model),
        (Side::P2, &overrides.p2_name, &overrides.p2_provider, &overrides.p2_model),
    ];
    for (side, name, provider, model) in per_side {
        let participant = settings.participants.get_mut(side);
        if let Some(name) = name {
            participant.name = name.clone();
        }
        if let Some(provider) = provider {
            participant.provider =
                ProviderKind::parse(provider).ok_or_else(|| ConfigError::InvalidValue {
                    field: "provider",
                    value: provider.clone(),
                })?;
        }
        if let Some(model) = model {
            participant.model = model.clone();
        }
    }

    if let Some(seed) = overrides.seed {
        config.mock.seed = Some(seed);
    }
    Ok(())
}

/// Gives remote participants without a configured key the one from the
/// environment, if set.
pub fn fill_keys_from_env(settings: &mut DebateSettings) {
    let Ok(key) = std::env::var(API_KEY_ENV) else {
        return;
    };
    fill_keys(settings, &key);
}

fn fill_keys(settings: &mut DebateSettings, key: &str) {
    if key.trim().is_empty() {
        return;
    }
    for side in [Side::P1, Side::P2] {
        let participant = settings.participants.get_mut(side);
        if participant.provider == ProviderKind::Gemini && participant.api_key().is_none() {
            log::debug!("Using {API_KEY_ENV} for {side}");
            participant.api_key = Some(SecretString::new(key.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use debate::config::ParticipantConfig;

    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let mut config = AppConfig::default();
        let overrides = Overrides {
            topic: Some("Tidal power".to_string()),
            tone: Some("Heated".to_string()),
            turns: Some("-2".to_string()),
            p2_name: Some("Gem".to_string()),
            p2_provider: Some("gemini".to_string()),
            p2_model: Some("gemini-2.5-pro".to_string()),
            seed: Some(8),
            ..Overrides::default()
        };

        apply_overrides(&mut config, &overrides).unwrap();

        let settings = &config.debate;
        assert_eq!(settings.topic, "Tidal power");
        assert_eq!(settings.tone, Tone::Heated);
        assert_eq!(settings.turn_limit, TurnLimit::DEFAULT);
        assert_eq!(settings.participant(Side::P1).provider, ProviderKind::Mock);
        let p2 = settings.participant(Side::P2);
        assert_eq!(p2.name, "Gem");
        assert_eq!(p2.provider, ProviderKind::Gemini);
        assert_eq!(p2.model, "gemini-2.5-pro");
        assert_eq!(config.mock.seed, Some(8));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let mut config = AppConfig::default();
        let overrides = Overrides {
            p1_provider: Some("carrier-pigeon".to_string()),
            ..Overrides::default()
        };

        let err = apply_overrides(&mut config, &overrides).unwrap_err();
        assert!(err.to_string().contains("carrier-pigeon"));
    }

    #[test]
    fn env_key_only_fills_remote_participants_without_one() {
        let mut settings = DebateSettings::default();
        settings.participants.p1 = ParticipantConfig::gemini("A", None);
        settings.participants.p2 = ParticipantConfig::mock("B");

        fill_keys(&mut settings, "env-key");
        assert_eq!(settings.participant(Side::P1).api_key(), Some("env-key"));
        assert_eq!(settings.participant(Side::P2).api_key(), None);

        settings.participants.p1 = ParticipantConfig::gemini("A", Some("own"));
        fill_keys(&mut settings, "env-key");
        assert_eq!(settings.participant(Side::P1).api_key(), Some("own"));
    }
}
