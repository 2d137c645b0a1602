#[cfg(test)]
pub mod tests {
    use serde_json::{json, Value};

    use crate::apis::models_api::image_edit::prompt_preview;
    use crate::apis::models_api::schemas::{BackgroundRemovalRequest, TransformRequest};
    use crate::configs::settings::ApiToken;
    use crate::cores::error::PredictionError;
    use crate::cores::image_models::background_remover::BackgroundRemover;
    use crate::cores::image_models::flux_kontext::FluxKontext;
    use crate::cores::image_models::image_controller::{describe_output, interpret_prediction};
    use crate::cores::image_models::replicate_client::AuthScheme;
    use crate::cores::schemas::PredictionResult;

    fn result(status: Option<&str>, output: Option<Value>, error: Option<Value>) -> PredictionResult {
        PredictionResult {
            status: status.map(str::to_string),
            output,
            error,
        }
    }

    #[test]
    fn test_succeeded_relays_output_of_any_shape() {
        let output = json!({"images": ["a.png", "b.png"]});
        let relayed = interpret_prediction("Prediction", result(Some("succeeded"), Some(output.clone()), None)).unwrap();
        assert_eq!(relayed, Some(output));

        let relayed = interpret_prediction("Prediction", result(Some("succeeded"), None, None)).unwrap();
        assert_eq!(relayed, None);

        let relayed = interpret_prediction("Prediction", result(Some("succeeded"), Some(Value::Null), None)).unwrap();
        assert_eq!(relayed, Some(Value::Null));
    }

    #[test]
    fn test_processing_needs_a_non_null_output() {
        let relayed = interpret_prediction("Prediction", result(Some("processing"), Some(json!("x.webp")), None)).unwrap();
        assert_eq!(relayed, Some(json!("x.webp")));

        let err = interpret_prediction("Prediction", result(Some("processing"), Some(Value::Null), None)).unwrap_err();
        assert!(matches!(err, PredictionError::Incomplete { .. }));
        assert_eq!(err.to_string(), "Prediction status: processing - Waiting for completion");
    }

    #[test]
    fn test_failed_without_message_uses_fallback() {
        let err = interpret_prediction("Background removal", result(Some("failed"), None, None)).unwrap_err();
        assert_eq!(err.to_string(), "Background removal failed: Unknown error");

        let err = interpret_prediction("Prediction", result(Some("failed"), None, Some(json!("")))).unwrap_err();
        assert_eq!(err.to_string(), "Prediction failed: Unknown error");
    }

    #[test]
    fn test_failed_with_structured_error_is_rendered_as_json() {
        let err = interpret_prediction("Prediction", result(Some("failed"), None, Some(json!({"code": 42})))).unwrap_err();
        assert_eq!(err.to_string(), r#"Prediction failed: {"code":42}"#);
    }

    #[test]
    fn test_other_status_carries_status_and_error() {
        let err = interpret_prediction("Prediction", result(Some("canceled"), None, Some(json!("canceled by user")))).unwrap_err();
        assert_eq!(err.to_string(), "Prediction status: canceled - canceled by user");

        let err = interpret_prediction("Prediction", result(None, Some(json!("ignored")), None)).unwrap_err();
        assert_eq!(err.to_string(), "Prediction status: unknown - Waiting for completion");
    }

    #[test]
    fn test_prediction_result_tolerates_missing_fields() {
        let parsed: PredictionResult = serde_json::from_str(r#"{"id":"abc","status":"starting"}"#).unwrap();
        assert_eq!(parsed.status.as_deref(), Some("starting"));
        assert!(parsed.output.is_none());
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_prediction_result_keeps_explicit_null_output() {
        let parsed: PredictionResult = serde_json::from_str(r#"{"status":"succeeded","output":null}"#).unwrap();
        assert_eq!(parsed.output, Some(Value::Null));
    }

    #[test]
    fn test_request_fields_keep_any_json_value() {
        let req: TransformRequest = serde_json::from_str(r#"{"prompt":123,"input_image":null}"#).unwrap();
        assert_eq!(req.prompt, Some(json!(123)));
        assert_eq!(req.input_image, Some(Value::Null));

        let req: BackgroundRemovalRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.image_url, None);
    }

    #[test]
    fn test_flux_kontext_body_has_fixed_parameters() {
        let model = FluxKontext::new(TransformRequest {
            prompt: Some(json!("make it snow")),
            input_image: Some(json!("data:image/png;base64,AAAA")),
        });
        let body = serde_json::to_value(model.request_body()).unwrap();
        assert_eq!(
            body,
            json!({
                "input": {
                    "prompt": "make it snow",
                    "guidance": 2.5,
                    "megapixels": "1",
                    "input_image": "data:image/png;base64,AAAA",
                    "aspect_ratio": "match_input_image",
                    "lora_strength": 1,
                    "output_format": "webp",
                    "output_quality": 100,
                    "num_inference_steps": 30,
                    "lora_weights": "https://replicate.delivery/xezq/9cGqCafl9wQMVS0WwkAAvFg0tT5hBTHOseO1YJCKFw3qRbEVA/flux-lora.tar",
                }
            })
        );
    }

    #[test]
    fn test_background_remover_body_omits_missing_image() {
        let model = BackgroundRemover::new(BackgroundRemovalRequest::default());
        let body = serde_json::to_value(model.request_body()).unwrap();
        assert_eq!(
            body,
            json!({
                "version": "851-labs/background-remover:a029dff38972b5fda4ec5d75d7d1cd25aeff621d2cf4946a41055d7db66b80bc",
                "input": {
                    "format": "png",
                    "reverse": false,
                    "threshold": 0,
                    "background_type": "rgba",
                }
            })
        );
    }

    #[test]
    fn test_auth_schemes() {
        let token = ApiToken::new("r8_secret");
        assert_eq!(AuthScheme::Token.header_value(&token), "Token r8_secret");
        assert_eq!(AuthScheme::Bearer.header_value(&token), "Bearer r8_secret");
    }

    #[test]
    fn test_prompt_preview_truncates_on_char_boundaries() {
        let prompt = "é".repeat(150);
        let preview = prompt_preview(Some(&json!(prompt)));
        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
        assert_eq!(prompt_preview(Some(&json!("short"))), "short...");
        assert_eq!(prompt_preview(Some(&json!(42))), "<none>");
        assert_eq!(prompt_preview(None), "<none>");
    }

    #[test]
    fn test_describe_output_hides_large_payloads() {
        let data_uri = format!("data:image/png;base64,{}", "A".repeat(500));
        let expected = format!("string ({} bytes)", data_uri.len());
        assert_eq!(describe_output(&json!(data_uri)), expected);
        assert_eq!(describe_output(&json!(["a", "b"])), "array of 2");
    }
}
