//! API call plan and its text renderings.
//!
//! The plan lists, in order:
//! 1. for every category, a parent category creation followed by one
//!    subcategory creation per brand;
//! 2. for every product, an assignment to its `<category>/<brand>` path.
//!
//! Nothing is sent. The plan is rendered either as `curl` commands or as
//! JSON.

mod curl;

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Product;
use crate::grouping::{assign_all, BrandsByCategory, CategoryAssignment};

pub use curl::render_curl;

/// Base URL of the store API the commands target.
pub const API_BASE_URL: &str = "http://192.168.1.210:8080";

/// Output format for the plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Shell `curl` commands.
    #[default]
    Curl,
    /// A JSON array of requests.
    Json,
}

/// HTTP methods used by the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Post,
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Post => write!(f, "POST"),
            HttpMethod::Put => write!(f, "PUT"),
        }
    }
}

/// Which phase of the plan a call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Creation of a top-level category.
    CreateCategory,
    /// Creation of a brand subcategory.
    CreateSubcategory,
    /// Assignment of a product to a category path.
    AssignProduct,
}

impl CallKind {
    /// Whether this call creates a category.
    pub fn is_creation(&self) -> bool {
        matches!(self, CallKind::CreateCategory | CallKind::CreateSubcategory)
    }
}

/// JSON request body of a call.
///
/// Field order is the order the keys are written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequestBody {
    /// `POST /api/categories`
    Category { name: String, description: String },
    /// `PUT /api/products/{id}/categories`
    CategoryPath {
        #[serde(rename = "categoryPath")]
        category_path: String,
    },
}

/// A single API request in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiCall {
    /// Plan phase.
    #[serde(skip)]
    pub kind: CallKind,
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute request URL.
    pub url: String,
    /// JSON body.
    pub body: RequestBody,
    /// Human-readable description.
    pub comment: String,
}

impl ApiCall {
    /// `POST /api/categories` for a top-level category.
    pub fn create_category(category: &str) -> Self {
        Self {
            kind: CallKind::CreateCategory,
            method: HttpMethod::Post,
            url: categories_url(),
            body: RequestBody::Category {
                name: category.to_string(),
                description: format!("{} products", category),
            },
            comment: format!("Create parent category: {}", category),
        }
    }

    /// `POST /api/categories` for a brand under `category`.
    pub fn create_subcategory(category: &str, brand: &str) -> Self {
        Self {
            kind: CallKind::CreateSubcategory,
            method: HttpMethod::Post,
            url: categories_url(),
            body: RequestBody::Category {
                name: brand.to_string(),
                description: format!("{} {}", brand, category),
            },
            comment: format!("Create subcategory: {} under {}", brand, category),
        }
    }

    /// `PUT /api/products/{id}/categories` for one product.
    pub fn assign_product(assignment: &CategoryAssignment<'_>) -> Self {
        let category_path = assignment.category_path();
        Self {
            kind: CallKind::AssignProduct,
            method: HttpMethod::Put,
            url: product_categories_url(assignment.product_id),
            comment: format!("Assign {} to {}", assignment.product_name, category_path),
            body: RequestBody::CategoryPath { category_path },
        }
    }
}

fn categories_url() -> String {
    format!("{}/api/categories", API_BASE_URL)
}

fn product_categories_url(product_id: &str) -> String {
    format!(
        "{}/api/products/{}/categories",
        API_BASE_URL,
        urlencoding::encode(product_id)
    )
}

/// The ordered list of API calls for a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPlan {
    calls: Vec<ApiCall>,
}

impl CommandPlan {
    /// Build the plan for `products`.
    pub fn build(products: &[Product]) -> Self {
        let assignments = assign_all(products);
        let grouping = BrandsByCategory::from_assignments(&assignments);
        Self::from_parts(&grouping, &assignments)
    }

    /// Build the plan from a grouping and the per-product assignments.
    pub fn from_parts(grouping: &BrandsByCategory, assignments: &[CategoryAssignment<'_>]) -> Self {
        let mut calls = Vec::new();

        for (category, brands) in grouping.iter() {
            calls.push(ApiCall::create_category(category));
            calls.extend(
                brands
                    .iter()
                    .map(|brand| ApiCall::create_subcategory(category, brand)),
            );
        }

        calls.extend(assignments.iter().map(ApiCall::assign_product));

        debug!(
            categories = grouping.len(),
            assignments = assignments.len(),
            "Built command plan"
        );
        Self { calls }
    }

    /// All calls, in order.
    pub fn calls(&self) -> &[ApiCall] {
        &self.calls
    }

    /// Category and subcategory creations.
    pub fn creations(&self) -> impl Iterator<Item = &ApiCall> {
        self.calls.iter().filter(|call| call.kind.is_creation())
    }

    /// Product assignments.
    pub fn assignments(&self) -> impl Iterator<Item = &ApiCall> {
        self.calls
            .iter()
            .filter(|call| call.kind == CallKind::AssignProduct)
    }

    /// Number of calls.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the plan has no calls.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Write the plan as a pretty-printed JSON array.
    pub fn render_json<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.calls)?;
        writeln!(writer)
    }

    /// Write the plan in `format`.
    pub fn render<W: Write>(&self, writer: &mut W, format: OutputFormat, header: bool) -> io::Result<()> {
        match format {
            OutputFormat::Curl => render_curl(self, writer, header)?,
            OutputFormat::Json => self.render_json(writer)?,
        }
        info!(calls = self.len(), ?format, "Rendered command plan");
        Ok(())
    }
}
