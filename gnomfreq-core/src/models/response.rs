//! Shapes of the JSON documents returned by the gnomAD GraphQL API.
//!
//! Only the fields requested by [`crate::query::build_query`] are modelled. Every
//! field is optional on the wire: gnomAD answers `null` for a dataset section the
//! variant is not present in, and `data.variant` is `null` for unknown variants.
use serde::Deserialize;

use super::build::DataCategory;
use super::population::PopulationRecord;
use crate::errors::FetchFailure;

/// The raw envelope of a GraphQL answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub variant: Option<VariantRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantRecord {
    #[serde(rename = "variantId")]
    pub variant_id: Option<String>,
    pub rsid: Option<String>,
    pub chrom: Option<String>,
    pub alt: Option<String>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub exome: Option<DatasetFrequencies>,
    #[serde(default)]
    pub genome: Option<DatasetFrequencies>,
}

/// One dataset section (`exome` or `genome`) of a variant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetFrequencies {
    #[serde(default)]
    pub populations: Option<Vec<PopulationRecord>>,
    pub af: Option<f64>,
    pub ac: Option<u64>,
    pub an: Option<u64>,
}

impl DatasetFrequencies {
    pub fn populations(&self) -> &[PopulationRecord] {
        self.populations.as_deref().unwrap_or(&[])
    }
}

impl GraphQlResponse {
    ///
    /// Turn the envelope into a usable response, or a failure if the API reported
    /// any error. The error messages are kept so they can be logged.
    ///
    pub fn into_variant_response(self) -> Result<VariantResponse, FetchFailure> {
        if let Some(errors) = self.errors {
            let messages = errors.into_iter().map(|e| e.message).collect();
            return Err(FetchFailure::Api(messages));
        }

        Ok(VariantResponse {
            variant: self.data.and_then(|data| data.variant),
        })
    }
}

/// A successful answer for one query.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantResponse {
    pub variant: Option<VariantRecord>,
}

impl VariantResponse {
    /// The requested dataset section, if gnomAD has data for it.
    pub fn section(&self, category: DataCategory) -> Option<&DatasetFrequencies> {
        let variant = self.variant.as_ref()?;
        match category {
            DataCategory::Exome => variant.exome.as_ref(),
            DataCategory::Genome => variant.genome.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<VariantResponse, FetchFailure> {
        let envelope: GraphQlResponse = serde_json::from_value(value).unwrap();
        envelope.into_variant_response()
    }

    #[rstest]
    fn test_exome_section_is_exposed() {
        let response = parse(json!({
            "data": {
                "variant": {
                    "variantId": "1-55516888-G-GA",
                    "rsid": "rs1",
                    "chrom": "1",
                    "alt": "GA",
                    "ref": "G",
                    "exome": {
                        "populations": [
                            {"id": "nfe", "ac": 4, "an": 12, "homozygote_count": 0, "hemizygote_count": 0}
                        ],
                        "af": 0.3, "ac": 4, "an": 12
                    },
                    "genome": null
                }
            }
        }))
        .unwrap();

        let exome = response.section(DataCategory::Exome).unwrap();
        assert_eq!(exome.populations(), &[PopulationRecord {
            id: "nfe".to_string(),
            ac: Some(4),
            an: Some(12),
            homozygote_count: Some(0),
            hemizygote_count: Some(0),
        }]);
        assert!(response.section(DataCategory::Genome).is_none());
        assert_eq!(
            response.variant.unwrap().reference.as_deref(),
            Some("G")
        );
    }

    #[rstest]
    fn test_errors_become_api_failure() {
        let result = parse(json!({
            "errors": [{"message": "Variant not found"}],
            "data": {"variant": null}
        }));
        assert_eq!(
            result.unwrap_err(),
            FetchFailure::Api(vec!["Variant not found".to_string()])
        );
    }

    #[rstest]
    fn test_empty_error_list_is_still_a_failure() {
        let result = parse(json!({"errors": []}));
        assert_eq!(result.unwrap_err(), FetchFailure::Api(vec![]));
    }

    #[rstest]
    fn test_null_variant_has_no_sections() {
        let response = parse(json!({"data": {"variant": null}})).unwrap();
        assert!(response.section(DataCategory::Exome).is_none());
        assert!(response.section(DataCategory::Genome).is_none());
    }

    #[rstest]
    fn test_null_populations_is_empty() {
        let response = parse(json!({
            "data": {"variant": {"genome": {"populations": null, "af": null, "ac": null, "an": null}}}
        }))
        .unwrap();
        let genome = response.section(DataCategory::Genome).unwrap();
        assert!(genome.populations().is_empty());
    }
}
