use crate::core::gemini::GenerativeClient;
use crate::core::{language, prompt, url};
use crate::error::{Error, Result};

pub struct VideoSummarizer<C> {
    client: C,
}

impl<C: GenerativeClient> VideoSummarizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Ask the model for a summary of `video_url`.
    ///
    /// The URL is checked before anything goes over the network. A custom
    /// `prompt` is sent exactly as given; otherwise the default prompt is
    /// built for the normalized `language`.
    pub async fn summarize(
        &self,
        video_url: &str,
        prompt: Option<&str>,
        language: &str,
    ) -> Result<String> {
        if !url::validate(video_url) {
            return Err(Error::InvalidUrl);
        }

        let language = language::normalize_language(language);
        let final_prompt = match prompt {
            Some(custom) => custom.to_string(),
            None => prompt::default_prompt(&language),
        };

        let video_id = url::extract_video_id(video_url);
        tracing::info!(
            model = self.client.model(),
            video_id = video_id.as_deref(),
            %language,
            custom_prompt = prompt.is_some(),
            "Requesting summary"
        );

        self.client
            .generate_content(video_url, &final_prompt)
            .await
            .map_err(|e| Error::Summarization(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use crate::core::gemini::GenerativeClient;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    pub struct Call {
        pub video_url: String,
        pub prompt: String,
    }

    #[derive(Clone)]
    pub struct MockClient {
        pub model: String,
        pub summary: String,
        pub calls: Arc<Mutex<Vec<Call>>>,
        pub fail_with: Option<String>,
    }

    impl MockClient {
        pub fn new(summary: &str) -> Self {
            Self {
                model: "mock-gemini".to_string(),
                summary: summary.to_string(),
                calls: Arc::new(Mutex::new(Vec::new())),
                fail_with: None,
            }
        }

        pub fn failing(msg: &str) -> Self {
            Self {
                fail_with: Some(msg.to_string()),
                ..Self::new("")
            }
        }
    }

    impl GenerativeClient for MockClient {
        type Error = String;

        fn model(&self) -> &str {
            &self.model
        }

        async fn generate_content(&self, video_url: &str, prompt: &str) -> Result<String, String> {
            self.calls.lock().unwrap().push(Call {
                video_url: video_url.to_string(),
                prompt: prompt.to_string(),
            });
            match &self.fail_with {
                Some(msg) => Err(msg.clone()),
                None => Ok(self.summary.clone()),
            }
        }
    }
}
