//! Response records.
//!
//! One typed record per list row and per detail view. Field names are the
//! JSON names clients already consume, so some records are camelCase and
//! some snake_case.

mod geo;
mod network;
mod person;
mod place;
mod scholarly;
mod source;
mod stats;
mod subject;
mod work;

pub use geo::{Feature, FeatureCollection, FeatureProperties, Point};
pub use network::{
    AuditSection, EdgeFont, NetworkData, NetworkEdge, NetworkNode, OntologyAudit, OntologyEdge,
    OntologyGraph, OntologyNode,
};
pub use person::{
    PersonDetail, PersonListItem, PersonPlace, PersonTime, PersonWork, ScholarlyMention,
};
pub use place::{PersonAtPlace, PlaceDetail, PlaceListItem};
pub use scholarly::{
    MentionedPerson, MentionedWork, Scholar, ScholarlyDetail, ScholarlyListItem, SourceRef,
};
pub use source::SourceItem;
pub use stats::Stats;
pub use subject::{
    LanguageDetail, LanguageListItem, SubjectDetail, SubjectListItem, WorkRef,
};
pub use work::{WorkAuthor, WorkDetail, WorkListItem};
