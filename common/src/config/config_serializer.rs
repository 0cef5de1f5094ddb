use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("Failed to deserialize config: file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pacing {
        pause_ms: u64,
        seed: Option<u64>,
    }

    #[test]
    fn test_serialize_writes_plain_yaml() {
        let yaml = YamlConfigSerializer
            .serialize(&Pacing {
                pause_ms: 100,
                seed: None,
            })
            .unwrap();

        assert_eq!(yaml, "pause_ms: 100\nseed: null\n");
    }

    #[test]
    fn test_deserialize_reads_optional_field() {
        let pacing: Pacing = YamlConfigSerializer.deserialize("pause_ms: 5\nseed: 12\n").unwrap();

        assert_eq!(
            pacing,
            Pacing {
                pause_ms: 5,
                seed: Some(12)
            }
        );
    }

    #[test]
    fn test_deserialize_rejects_blank_content() {
        let result: Result<Pacing, String> = YamlConfigSerializer.deserialize("  \n");

        assert!(result.unwrap_err().contains("empty"));
    }
}
