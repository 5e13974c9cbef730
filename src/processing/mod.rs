//! Ranking engine: skill extraction, TF-IDF vectorization, similarity and ranking

pub mod profile;
pub mod ranker;
pub mod similarity;
pub mod skill_matcher;
pub mod text_processor;
pub mod tfidf;
