//! Business logic services.
//!
//! Services merge repository rows into response records. They are built
//! with the `FromContext` derive from the repositories they need.

pub mod aggregate;
mod geo;
mod language;
mod network;
mod ontology;
mod person;
mod place;
mod scholarly;
mod source;
mod stats;
mod subject;
mod work;

pub use geo::GeoService;
pub use language::LanguageService;
pub use network::NetworkService;
pub use ontology::OntologyService;
pub use person::PersonService;
pub use place::PlaceService;
pub use scholarly::ScholarlyService;
pub use source::SourceService;
pub use stats::StatsService;
pub use subject::SubjectService;
pub use work::WorkService;
