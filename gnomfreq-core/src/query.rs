//! Construction of GraphQL request bodies for the gnomAD API.
use serde::Serialize;
use tracing::debug;

use crate::errors::BuildSelectorError;
use crate::models::{DataCategory, ReferenceBuild};

/// The JSON body posted to the API for one lookup attempt.
///
/// Only `query` and `variables` are serialized. The variant, build and category
/// are kept alongside so a [`crate::driver::VariantSource`] can log or route on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPayload {
    pub query: String,
    pub variables: QueryVariables,
    #[serde(skip)]
    pub variant_id: String,
    #[serde(skip)]
    pub build: ReferenceBuild,
    #[serde(skip)]
    pub category: DataCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryVariables {
    #[serde(rename = "withFriends")]
    pub with_friends: bool,
}

///
/// Build the payload requesting per-population allele counts for a variant.
///
/// # Arguments
/// - variant_id: the variant identifier, passed through as-is
/// - category: the dataset section to request
/// - build: the gnomAD release to query
///
pub fn build_query(variant_id: &str, category: DataCategory, build: ReferenceBuild) -> QueryPayload {
    debug!(
        variant = variant_id,
        dataset = build.token(),
        category = category.as_str(),
        "building variant query"
    );

    QueryPayload {
        query: variant_document(variant_id, build, category),
        variables: QueryVariables {
            with_friends: false,
        },
        variant_id: variant_id.to_string(),
        build,
        category,
    }
}

///
/// Same as [`build_query`], taking the raw numeric build selector (1 or 2).
///
pub fn build_query_for_selector(
    variant_id: &str,
    category: DataCategory,
    selector: i64,
) -> Result<QueryPayload, BuildSelectorError> {
    let build = ReferenceBuild::from_selector(selector)?;
    Ok(build_query(variant_id, category, build))
}

fn variant_document(variant_id: &str, build: ReferenceBuild, category: DataCategory) -> String {
    // GraphQL string literals use JSON's escapes
    let variant = serde_json::Value::from(variant_id).to_string();
    let dataset = build.token();
    let section = category.as_str();

    format!(
        r#"{{
  variant(variantId: {variant}, dataset: {dataset}) {{
    variantId: variantId
    rsid
    chrom
    alt
    ref
    {section} {{
      populations {{
        id
        ac
        an
        homozygote_count
        hemizygote_count
      }}
      af
      ac
      an
    }}
  }}
}}
"#
    )
}
