//! Résumé upload to the parsing backend

use crate::client::{backend_error, build_http_client};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::input::ResumeUpload;
use log::{debug, info};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Candidate profile extracted by the parsing backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// GitHub username found on the résumé
    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub education: Vec<String>,

    #[serde(default)]
    pub experience: Vec<String>,

    #[serde(default)]
    pub skills_found: Vec<String>,

    #[serde(default)]
    pub raw_text: Option<String>,
}

impl CandidateProfile {
    pub fn primary_education(&self) -> &str {
        self.education.first().map(String::as_str).unwrap_or("N/A")
    }
}

#[derive(Debug, Deserialize)]
pub struct ParseResumeResponse {
    pub profile: CandidateProfile,
}

#[derive(Clone)]
pub struct ResumeParserClient {
    client: Client,
    base_url: String,
}

impl ResumeParserClient {
    pub fn new(services: &ServiceConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(services)?,
            base_url: services.parser_base_url.clone(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/parse_resume", self.base_url.trim_end_matches('/'))
    }

    /// Upload the résumé as the `resume` multipart field and return the parsed profile.
    pub async fn parse_resume(&self, upload: &ResumeUpload) -> Result<CandidateProfile> {
        let url = self.endpoint();
        info!("Uploading {} ({} bytes) to {}", upload.file_name, upload.bytes.len(), url);

        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(upload.format.mime_type())?;
        let form = Form::new().part("resume", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        if !response.status().is_success() {
            return Err(backend_error(response, "Analysis failed").await);
        }

        let parsed: ParseResumeResponse = response.json().await?;
        debug!(
            "Parsed profile for '{}' with {} skills",
            parsed.profile.user,
            parsed.profile.skills_found.len()
        );
        Ok(parsed.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::test_server::{direct_client, serve_once};
    use crate::error::SkillVerifierError;
    use crate::input::ResumeFormat;
    use serde_json::json;

    fn parser_at(base_url: &str) -> ResumeParserClient {
        let mut services = ServiceConfig::default();
        services.parser_base_url = base_url.to_string();
        let mut client = ResumeParserClient::new(&services).unwrap();
        client.client = direct_client();
        client
    }

    fn sample_upload() -> ResumeUpload {
        ResumeUpload {
            file_name: "cv.pdf".to_string(),
            format: ResumeFormat::Pdf,
            bytes: b"%PDF-1.4 fake".to_vec(),
        }
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let mut services = ServiceConfig::default();
        services.parser_base_url = "https://parser.example.com/".to_string();
        let client = ResumeParserClient::new(&services).unwrap();
        assert_eq!(client.endpoint(), "https://parser.example.com/parse_resume");
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let response: ParseResumeResponse = serde_json::from_value(json!({
            "profile": {
                "user": "octocat",
                "email": null,
                "skills_found": ["Rust", "Go"]
            },
            "response": "ok"
        }))
        .unwrap();

        let profile = response.profile;
        assert_eq!(profile.user, "octocat");
        assert_eq!(profile.email, None);
        assert_eq!(profile.skills_found, vec!["Rust", "Go"]);
        assert!(profile.experience.is_empty());
        assert_eq!(profile.primary_education(), "N/A");
    }

    #[tokio::test]
    async fn test_parse_resume_uploads_multipart_field() {
        let body = json!({
            "profile": {
                "user": "octocat",
                "email": "octo@example.com",
                "education": ["B.Sc."],
                "skills_found": ["Rust"]
            }
        })
        .to_string();
        let (base_url, server) = serve_once("200 OK", "application/json", &body).await;

        let profile = parser_at(&base_url).parse_resume(&sample_upload()).await.unwrap();
        assert_eq!(profile.user, "octocat");
        assert_eq!(profile.email.as_deref(), Some("octo@example.com"));
        assert_eq!(profile.skills_found, vec!["Rust"]);

        let request = server.await.unwrap();
        assert_eq!(request.request_line(), "POST /parse_resume HTTP/1.1");
        assert!(request
            .header("content-type")
            .is_some_and(|ct| ct.starts_with("multipart/form-data")));
        let sent = request.body_text();
        assert!(sent.contains(r#"name="resume""#));
        assert!(sent.contains(r#"filename="cv.pdf""#));
        assert!(sent.contains("application/pdf"));
        assert!(sent.contains("%PDF-1.4 fake"));
    }

    #[tokio::test]
    async fn test_parse_resume_error_body() {
        let (base_url, server) =
            serve_once("400 Bad Request", "application/json", r#"{"error": "No file uploaded"}"#).await;

        match parser_at(&base_url).parse_resume(&sample_upload()).await {
            Err(SkillVerifierError::Backend { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "No file uploaded");
            }
            other => panic!("expected Backend error, got {:?}", other),
        }
        server.await.unwrap();
    }
}
