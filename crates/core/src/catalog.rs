//! Read-only restaurant and blog records
//!
//! Records are loaded once from JSON files and never modified. Restaurant
//! files hold `{ "restaurants": [...] }` or a bare array; blog files hold
//! `{ "blogs": [...] }` or a bare array.

use crate::error::{Error, Result, ResultExt};
use crate::validation::validate_restaurant;
use nearbite_search::records::decode_records;
use nearbite_search::{RankedRestaurant, Restaurant, SearchRequest};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A blog post about one restaurant
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub restaurant_id: String,
    pub restaurant_name: String,
    pub title: String,
    pub content: String,
    pub author: String,
    /// As written in the source data, e.g. `"2024-03-15"`
    pub publish_date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Loaded restaurant and blog records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
    blogs: Vec<BlogPost>,
}

impl Catalog {
    /// Build a catalog from records already in memory
    pub fn from_parts(restaurants: Vec<Restaurant>, blogs: Vec<BlogPost>) -> Self {
        Self { restaurants, blogs }
    }

    /// Load restaurants and, optionally, blog posts from disk
    pub fn load(restaurants_path: &Path, blogs_path: Option<&Path>) -> Result<Self> {
        let restaurants = load_restaurants(restaurants_path)?;
        let blogs = match blogs_path {
            Some(path) => load_blogs(path)?,
            None => Vec::new(),
        };

        tracing::debug!(
            restaurants = restaurants.len(),
            blogs = blogs.len(),
            "Loaded catalog"
        );

        Ok(Self::from_parts(restaurants, blogs))
    }

    /// All restaurants, in file order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Restaurant by id
    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// All blog posts, in file order
    pub fn blogs(&self) -> &[BlogPost] {
        &self.blogs
    }

    /// Blog post by id
    pub fn blog(&self, id: &str) -> Option<&BlogPost> {
        self.blogs.iter().find(|b| b.id == id)
    }

    /// Blog post by id, or a `RecordNotFound` error
    pub fn require_blog(&self, id: &str) -> Result<&BlogPost> {
        self.blog(id).ok_or_else(|| Error::record_not_found("blog", id))
    }

    /// Blog posts about one restaurant, in file order
    pub fn blogs_for_restaurant<'a>(
        &'a self,
        restaurant_id: &'a str,
    ) -> impl Iterator<Item = &'a BlogPost> + 'a {
        self.blogs
            .iter()
            .filter(move |b| b.restaurant_id == restaurant_id)
    }

    /// Run a search over the loaded restaurants
    pub fn search(&self, request: &SearchRequest) -> Vec<RankedRestaurant> {
        request.execute(&self.restaurants)
    }
}

/// Load restaurant records from a JSON file
///
/// Records failing validation are kept; each problem is logged as a warning.
pub fn load_restaurants(path: &Path) -> Result<Vec<Restaurant>> {
    let restaurants: Vec<Restaurant> = read_records(path, "restaurants")?;

    for restaurant in &restaurants {
        let result = validate_restaurant(restaurant);
        for error in result.errors() {
            tracing::warn!(id = %restaurant.id, "Questionable restaurant record: {}", error);
        }
    }

    Ok(restaurants)
}

/// Load blog posts from a JSON file
pub fn load_blogs(path: &Path) -> Result<Vec<BlogPost>> {
    read_records(path, "blogs")
}

fn read_records<T: serde::de::DeserializeOwned>(path: &Path, key: &str) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        let err = Error::from(e).with_context(format!("Failed to read {}", path.display()));
        if err.code == crate::ErrorCode::FileNotFound {
            err.with_suggestion("Use --data/--blogs or the [data] section of nearbite.toml")
        } else {
            err
        }
    })?;

    decode_records(&content, key)
        .map_err(Error::from)
        .context(format!("Failed to parse {}", path.display()))
}
