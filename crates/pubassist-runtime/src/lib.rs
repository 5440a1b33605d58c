pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod status;
pub mod typeahead;

pub use client::{ApiClient, ApiRequest, ApiResponse, ArticleSort, HttpTransport, Method, Page, Transport};
pub use config::{ApiConfig, BrowseConfig, Config, Endpoints};
pub use error::{Error, Result};
pub use services::{
    ArticleBrowser, ArticleSession, AuthorBrowser, AuthorDetails, AuthorHit, AuthorSearchView,
    BrowseSettings, HypeGraph, PageView, ResultSet, Section,
};
pub use status::RequestStatus;
pub use typeahead::Typeahead;
