use clap::{Parser, Subcommand};
use strato_common::ModelType;

#[derive(Debug, Parser)]
#[command(name = "strato")]
#[command(about = "Strato console for a model-serving supervisor", long_about = None)]
pub struct Args {
    /// Supervisor endpoint; when unset it is derived from --console-url
    #[arg(long, env = "STRATO_ENDPOINT")]
    pub endpoint: Option<String>,

    /// URL the console is served from
    #[arg(long, default_value = "http://127.0.0.1:9997/ui")]
    pub console_url: String,

    /// API token (Authorization: Bearer); "no_auth" suppresses the header
    #[arg(long, env = "STRATO_TOKEN")]
    pub token: Option<String>,

    /// Log UI URLs instead of opening a browser
    #[arg(long)]
    pub no_browser: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Running-instance management
    Instance {
        #[command(subcommand)]
        subcommand: InstanceCommand,
    },
    /// Model registration management
    Registration {
        #[command(subcommand)]
        subcommand: RegistrationCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum InstanceCommand {
    /// List running instances by category
    List,
    /// Launch a new instance
    Launch {
        /// Registered model name
        #[arg(long)]
        name: String,

        /// Explicit instance uid (server-assigned when omitted)
        #[arg(long)]
        uid: Option<String>,

        /// Parameter count in billions
        #[arg(long)]
        size_in_billions: Option<u64>,

        /// Model file format (e.g. ggmlv3, pytorch)
        #[arg(long)]
        format: Option<String>,

        /// Quantization (e.g. q4_0)
        #[arg(long)]
        quantization: Option<String>,

        /// Also build the instance's UI page and open it
        #[arg(long)]
        ui: bool,
    },
    /// Terminate a running instance
    Terminate {
        /// Instance uid
        model_uid: String,
    },
    /// Open an instance's UI, building it first when needed
    Open {
        /// Instance uid
        model_uid: String,

        /// Model name for the UI descriptor (defaults to the uid)
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum RegistrationCommand {
    /// List registrable models of one type
    List {
        /// Model type: LLM, embedding, image, rerank, audio
        #[arg(value_parser = parse_model_type)]
        model_type: ModelType,

        /// Free-text filter over name and description
        #[arg(long, default_value = "")]
        search: String,

        /// Ability filter (e.g. chat, generate); "all" disables it
        #[arg(long, default_value = "all")]
        ability: String,
    },
    /// Remove a custom registration
    Remove {
        /// Model type: LLM, embedding, image, rerank, audio
        #[arg(value_parser = parse_model_type)]
        model_type: ModelType,

        /// Registration name
        name: String,
    },
}

fn parse_model_type(raw: &str) -> Result<ModelType, String> {
    match raw {
        "LLM" | "llm" => Ok(ModelType::Llm),
        "embedding" => Ok(ModelType::Embedding),
        "image" => Ok(ModelType::Image),
        "rerank" => Ok(ModelType::Rerank),
        "audio" => Ok(ModelType::Audio),
        other => Err(format!(
            "unknown model type '{other}', expected LLM, embedding, image, rerank or audio"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_type_parsing() {
        assert_eq!(parse_model_type("LLM").unwrap(), ModelType::Llm);
        assert_eq!(parse_model_type("llm").unwrap(), ModelType::Llm);
        assert_eq!(parse_model_type("rerank").unwrap(), ModelType::Rerank);
        assert!(parse_model_type("video").is_err());
    }
}
