/// Build the summary prompt used when the caller does not supply one.
///
/// `language` should already be the canonical display name.
pub fn default_prompt(language: &str) -> String {
    format!(
        "Please analyze this YouTube video and provide a comprehensive summary in {language}.

IMPORTANT: Your entire response must be written in {language}.

Structure the summary as follows:
1. Main topic and key points
2. Important insights or findings
3. Actionable recommendations (if any)
4. Brief conclusion

Format the result as a clear, structured summary in {language}.
Remember: respond only in {language}, including all headings."
    )
}
