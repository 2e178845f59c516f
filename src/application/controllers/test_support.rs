// src/application/controllers/test_support.rs
//
// In-memory catalog for controller tests. Requests can be held open
// with a gate so tests decide the order in which responses resolve.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::domain::{Genre, MovieCategory, MovieDetail, MoviePage, MovieSummary};
use crate::error::{AppError, AppResult};
use crate::integrations::CatalogClient;

pub fn summary(id: i64) -> MovieSummary {
    MovieSummary {
        id,
        title: format!("Movie {}", id),
        poster_path: Some(format!("/poster{}.jpg", id)),
        vote_average: 6.5,
        release_date: "2010-07-16".to_string(),
        overview: format!("Overview of movie {}", id),
    }
}

pub fn detail(id: i64) -> MovieDetail {
    MovieDetail {
        summary: summary(id),
        tagline: Some("Your mind is the scene of the crime.".to_string()),
        genres: vec![Genre { id: 28, name: "Action".to_string() }],
        runtime: Some(148),
    }
}

pub fn page_of(page: u32, ids: &[i64], total_pages: u32) -> MoviePage {
    MoviePage {
        page,
        results: ids.iter().map(|id| summary(*id)).collect(),
        total_pages,
        total_results: total_pages * 20,
    }
}

#[derive(Default)]
pub struct FakeCatalog {
    pages: Mutex<HashMap<u32, MoviePage>>,
    details: Mutex<HashMap<i64, MovieDetail>>,
    recommendations: Mutex<HashMap<i64, Vec<MovieSummary>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    requests: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_page(&self, page: u32, movie_page: MoviePage) {
        self.pages.lock().unwrap().insert(page, movie_page);
    }

    pub fn add_detail(&self, movie: MovieDetail) {
        self.details.lock().unwrap().insert(movie.id(), movie);
    }

    pub fn add_recommendations(&self, movie_id: i64, movies: Vec<MovieSummary>) {
        self.recommendations.lock().unwrap().insert(movie_id, movies);
    }

    /// Hold the request named `key` ("page:2", "detail:550") until the sender fires
    pub fn gate(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.to_string(), rx);
        tx
    }

    /// Request keys in dispatch order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    async fn pass_gate(&self, key: String) {
        self.requests.lock().unwrap().push(key.clone());
        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(rx) = gate {
            rx.await.ok();
        }
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn list_movies(&self, _category: MovieCategory, page: u32) -> AppResult<MoviePage> {
        self.pass_gate(format!("page:{}", page)).await;
        self.pages
            .lock()
            .unwrap()
            .get(&page)
            .cloned()
            .ok_or_else(|| AppError::ExternalService {
                status: 500,
                message: "Internal error".to_string(),
            })
    }

    async fn movie_detail(&self, movie_id: i64) -> AppResult<MovieDetail> {
        self.pass_gate(format!("detail:{}", movie_id)).await;
        self.details
            .lock()
            .unwrap()
            .get(&movie_id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    /// Unknown ids fail, mirroring a remote error after a successful detail fetch
    async fn recommendations(&self, movie_id: i64) -> AppResult<Vec<MovieSummary>> {
        self.pass_gate(format!("recommendations:{}", movie_id)).await;
        self.recommendations
            .lock()
            .unwrap()
            .get(&movie_id)
            .cloned()
            .ok_or_else(|| AppError::ExternalService {
                status: 503,
                message: "Service unavailable".to_string(),
            })
    }
}

/// Yield until the fake has seen `key`
pub async fn wait_for_request(catalog: &FakeCatalog, key: &str) {
    for _ in 0..1_000 {
        if catalog.requests().iter().any(|k| k == key) {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("request {} was never dispatched", key);
}
