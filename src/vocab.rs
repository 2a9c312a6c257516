//! Namespaces and IRIs of the research ontology.

use oxigraph::model::NamedNode;

/// Ontology namespace. Entity identifiers are resolved under it.
pub const JP: &str = "http://jewish_philosophy.org/ontology#";

/// Secondary namespace some person records were minted under.
pub const ID_NS: &str = "http://jewish_philosophy.org/id/";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

macro_rules! jp_terms {
    ($($name:ident => $local:literal),+ $(,)?) => {
        $(pub const $name: &str = concat!("http://jewish_philosophy.org/ontology#", $local);)+
    };
}

jp_terms! {
    TITLE => "title",
    AUTHORITY_LINK => "authorityLink",
    HAS_SOURCE => "hasSource",
    HAS_SUBJECT => "hasSubject",
    WRITTEN_IN_LANGUAGE => "writtenInLanguage",
    LATITUDE => "latitude",
    LONGITUDE => "longitude",
    SUBJECT_DESCRIPTION => "subjectDescription",
    HAS_AUTHOR => "hasAuthor",
    ABOUT_PERSON => "aboutPerson",
    ABOUT_WORK => "aboutWork",
    PUBLICATION_YEAR => "publicationYear",
    YEAR => "year",
}

/// IRI of an entity identifier in the ontology namespace.
pub fn jp_iri(id: &str) -> String {
    format!("{JP}{id}")
}

/// IRI of a requested entity under `namespace`, or `None` when the
/// identifier cannot form a valid IRI.
pub fn entity_iri(namespace: &str, id: &str) -> Option<String> {
    NamedNode::new(format!("{namespace}{id}"))
        .ok()
        .map(NamedNode::into_string)
}

/// Display identifier of a URI: its last path segment, then its fragment.
pub fn local_id(uri: &str) -> &str {
    let path = uri.trim_matches('/');
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment.rsplit('#').next().unwrap_or(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_id() {
        assert_eq!(local_id("http://jewish_philosophy.org/ontology#Q1"), "Q1");
        assert_eq!(local_id("http://jewish_philosophy.org/id/Q42"), "Q42");
        assert_eq!(local_id("http://example.org/things/W7/"), "W7");
        assert_eq!(local_id("Q9"), "Q9");
    }

    #[test]
    fn test_term_iris() {
        assert_eq!(TITLE, "http://jewish_philosophy.org/ontology#title");
        assert_eq!(jp_iri("Source_Wikidata"), format!("{JP}Source_Wikidata"));
    }

    #[test]
    fn test_entity_iri_rejects_unusable_ids() {
        assert_eq!(entity_iri(ID_NS, "Q1").as_deref(), Some("http://jewish_philosophy.org/id/Q1"));
        assert_eq!(entity_iri(JP, "W7"), Some(jp_iri("W7")));
        assert_eq!(entity_iri(JP, "a b"), None);
        assert_eq!(entity_iri(JP, "a>b"), None);
        assert_eq!(entity_iri(JP, "x{y"), None);
    }
}
