use crate::cli::Settings;
use crate::core::{GenerativeClient, Report, VideoSummarizer, normalize_language};
use crate::error::Result;
use crate::tui::Console;

/// One full invocation: echo the inputs, fetch the summary, show it and
/// optionally save it.
pub async fn run<C, K>(settings: &Settings, client: C, console: &mut K) -> Result<()>
where
    C: GenerativeClient,
    K: Console,
{
    let summarizer = VideoSummarizer::new(client);

    console.banner(summarizer.model())?;
    console.inputs(&settings.video_url, &settings.language)?;

    let summary = console
        .wait_for(
            "Generating summary...",
            summarizer.summarize(
                &settings.video_url,
                settings.prompt.as_deref(),
                &settings.language,
            ),
        )
        .await??;

    console.summary(&summary)?;

    if let Some(path) = &settings.output {
        let language = normalize_language(&settings.language);
        Report {
            video_url: &settings.video_url,
            model: summarizer.model(),
            language: &language,
            summary: &summary,
        }
        .save(path)
        .await?;
        console.saved(path)?;
    }

    Ok(())
}
