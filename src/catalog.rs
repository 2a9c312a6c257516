//! Query catalog.
//!
//! Every SPARQL query the service runs lives here as a [`Template`]. Listing
//! templates carry a `{source_filter}` insertion point that receives the
//! fragment produced by [`crate::filter`]. Detail templates bind their single
//! entity through `$name` parameters instead.

use crate::error::AppError;

/// Placeholder replaced by a provenance constraint (or nothing).
pub const SOURCE_FILTER: &str = "{source_filter}";

macro_rules! sparql_template {
    ($name:ident, $body:literal) => {
        pub const $name: Template = Template::new(
            stringify!($name),
            concat!(
                "PREFIX jp: <http://jewish_philosophy.org/ontology#>\n",
                "PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>\n",
                "PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>\n",
                "PREFIX owl: <http://www.w3.org/2002/07/owl#>\n",
                $body
            ),
        );
    };
}

/// A named SPARQL query with an optional `{source_filter}` insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    name: &'static str,
    body: &'static str,
}

impl Template {
    pub const fn new(name: &'static str, body: &'static str) -> Self {
        Self { name, body }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the template accepts a provenance constraint.
    pub fn is_filterable(&self) -> bool {
        self.body.contains(SOURCE_FILTER)
    }

    /// Query text with no constraint inserted.
    pub fn unfiltered(&self) -> String {
        self.body.replace(SOURCE_FILTER, "")
    }

    /// Query text with `fragment` inserted at the insertion point.
    ///
    /// A non-empty fragment for a template without an insertion point is a
    /// programming error and fails rather than silently dropping the filter.
    pub fn render(&self, fragment: &str) -> Result<String, AppError> {
        if fragment.is_empty() {
            return Ok(self.unfiltered());
        }
        if !self.is_filterable() {
            return Err(AppError::Query {
                message: format!("template {} has no {} insertion point", self.name, SOURCE_FILTER),
                query: self.body.to_string(),
            });
        }
        Ok(self.body.replace(SOURCE_FILTER, fragment))
    }
}

// Persons

sparql_template!(LIST_PERSONS, "
SELECT ?uri ?label
WHERE {
    ?uri a jp:HistoricalPerson ;
         rdfs:label ?label .
    {source_filter}
}
ORDER BY ?label ?uri
");

sparql_template!(LIST_PERSONS_WORKS, "
SELECT ?person ?value
WHERE {
    ?value jp:writtenBy ?person .
    {source_filter}
}
");

sparql_template!(LIST_PERSONS_PLACES, "
SELECT ?person ?value
WHERE {
    ?person jp:hasPlaceRelation ?pr .
    ?pr jp:relatedPlace ?place .
    ?place rdfs:label ?value .
    {source_filter}
}
");

sparql_template!(LIST_PERSONS_TIMES, "
SELECT ?person ?start ?end
WHERE {
    ?person jp:hasTimeRelation ?tr .
    ?tr jp:timeFrom ?start .
    OPTIONAL { ?tr jp:timeUntil ?end }
    {source_filter}
}
");

sparql_template!(LIST_PERSONS_MENTIONS, "
SELECT ?person ?value
WHERE {
    ?value jp:aboutPerson ?person .
    {source_filter}
}
");

sparql_template!(GET_PERSON_WORKS, "
SELECT ?work ?title
WHERE {
    ?work jp:writtenBy $person ;
          jp:title ?title .
}
ORDER BY ?title ?work
");

sparql_template!(GET_PERSON_SCHOLARLY, "
SELECT ?sw ?title ?label ?year
WHERE {
    ?sw jp:aboutPerson $person .
    OPTIONAL { ?sw jp:title ?title }
    OPTIONAL { ?sw rdfs:label ?label }
    OPTIONAL { ?sw jp:publicationYear ?py }
    OPTIONAL { ?sw jp:year ?y }
    BIND(COALESCE(?py, ?y) AS ?year)
}
ORDER BY ?sw ?title ?label ?year
");

sparql_template!(GET_PERSON_PLACES, "
SELECT ?place ?label ?type
WHERE {
    $person jp:hasPlaceRelation ?rel .
    ?rel jp:relatedPlace ?place .
    ?place rdfs:label ?label .
    OPTIONAL { ?rel jp:placeType ?type }
}
ORDER BY ?label ?place ?type
");

sparql_template!(GET_PERSON_TIMES, "
SELECT ?rel ?birthYear ?deathYear
WHERE {
    $person jp:hasTimeRelation ?rel .
    OPTIONAL { ?rel jp:birthYear ?birthYear }
    OPTIONAL { ?rel jp:deathYear ?deathYear }
}
ORDER BY ?birthYear ?deathYear ?rel
");

// Works

sparql_template!(LIST_WORKS, "
SELECT ?uri ?label
WHERE {
    ?uri a jp:HistoricalWork ;
         jp:title ?label .
    {source_filter}
}
ORDER BY ?label ?uri
");

sparql_template!(LIST_WORKS_AUTHORS, "
SELECT ?work ?value
WHERE {
    ?work jp:writtenBy ?author .
    ?author rdfs:label ?value .
    {source_filter}
}
");

sparql_template!(LIST_WORKS_MENTIONS, "
SELECT ?work ?value
WHERE {
    ?value jp:aboutWork ?work .
    {source_filter}
}
");

sparql_template!(GET_WORK_AUTHORS, "
SELECT ?author ?name
WHERE {
    $work jp:writtenBy ?author .
    ?author rdfs:label ?name .
}
ORDER BY ?name ?author
");

sparql_template!(GET_WORK_SCHOLARLY, "
SELECT ?sw ?title ?year
WHERE {
    ?sw jp:aboutWork $work ;
        jp:title ?title .
    OPTIONAL { ?sw jp:publicationYear ?py }
    OPTIONAL { ?sw jp:year ?y }
    BIND(COALESCE(?py, ?y) AS ?year)
}
ORDER BY ?sw ?title ?year
");

// Places

sparql_template!(LIST_PLACES, "
SELECT ?uri ?label ?lat ?long
WHERE {
    ?uri a jp:Place ;
         rdfs:label ?label .
    OPTIONAL { ?uri jp:latitude ?lat ; jp:longitude ?long }
    {source_filter}
}
ORDER BY ?label ?uri ?lat ?long
");

sparql_template!(LIST_PLACES_PEOPLE, "
SELECT ?place ?value
WHERE {
    ?value jp:hasPlaceRelation ?pr .
    ?pr jp:relatedPlace ?place .
    {source_filter}
}
");

sparql_template!(GET_PLACE_PEOPLE, "
SELECT ?person ?label ?type
WHERE {
    ?person jp:hasPlaceRelation ?rel ;
            rdfs:label ?label .
    ?rel jp:relatedPlace $place .
    OPTIONAL { ?rel jp:placeType ?type }
}
ORDER BY ?type ?label ?person
");

// Subjects

sparql_template!(LIST_SUBJECTS, "
SELECT ?uri ?label
WHERE {
    ?uri a jp:Subject .
    OPTIONAL { ?uri rdfs:label ?label }
    {source_filter}
}
ORDER BY ?label ?uri
");

sparql_template!(LIST_SUBJECTS_WORKS, "
SELECT ?subject ?value
WHERE {
    ?value jp:hasSubject ?subject .
    {source_filter}
}
");

sparql_template!(GET_SUBJECT_WORKS, "
SELECT ?work ?title ?label
WHERE {
    ?work jp:hasSubject $subject .
    OPTIONAL { ?work jp:title ?title }
    OPTIONAL { ?work rdfs:label ?label }
}
ORDER BY ?work ?title ?label
");

// Languages

sparql_template!(LIST_LANGUAGES, "
SELECT ?uri ?label
WHERE {
    ?uri a jp:HistoricalLanguage .
    OPTIONAL { ?uri rdfs:label ?label }
    {source_filter}
}
ORDER BY ?label ?uri
");

sparql_template!(LIST_LANGUAGES_WORKS, "
SELECT ?language ?value
WHERE {
    ?value jp:writtenInLanguage ?language .
    {source_filter}
}
");

sparql_template!(GET_LANGUAGE_WORKS, "
SELECT ?work ?title
WHERE {
    ?work jp:writtenInLanguage $language ;
          jp:title ?title .
}
ORDER BY ?title ?work
");

// Scholarly works

sparql_template!(LIST_SCHOLARLY, "
SELECT ?uri ?title ?label ?year ?type ?publisher
WHERE {
    ?uri a jp:ScholarlyWork .
    OPTIONAL { ?uri jp:title ?title }
    OPTIONAL { ?uri rdfs:label ?label }
    OPTIONAL { ?uri jp:publicationYear ?py }
    OPTIONAL { ?uri jp:year ?y }
    OPTIONAL { ?uri jp:resourceType ?type }
    OPTIONAL { ?uri jp:publisher ?publisher }
    BIND(COALESCE(?py, ?y) AS ?year)
    {source_filter}
}
ORDER BY ?uri ?title ?label ?year ?type ?publisher
");

sparql_template!(LIST_SCHOLARLY_AUTHORS, "
SELECT ?sw ?author ?name
WHERE {
    ?sw a jp:ScholarlyWork ;
        jp:hasAuthor ?author .
    ?author rdfs:label ?name .
    {source_filter}
}
ORDER BY ?sw ?author ?name
");

sparql_template!(LIST_SCHOLARLY_SOURCES, "
SELECT ?sw ?source ?label
WHERE {
    ?sw a jp:ScholarlyWork ;
        jp:hasSource ?source .
    ?source rdfs:label ?label .
    {source_filter}
}
ORDER BY ?sw ?source ?label
");

sparql_template!(LIST_SCHOLARLY_PERSON_MENTIONS, "
SELECT ?sw ?value
WHERE {
    ?sw a jp:ScholarlyWork ;
        jp:aboutPerson ?value .
    {source_filter}
}
");

sparql_template!(LIST_SCHOLARLY_WORK_MENTIONS, "
SELECT ?sw ?value
WHERE {
    ?sw a jp:ScholarlyWork ;
        jp:aboutWork ?value .
    {source_filter}
}
");

// Sources

sparql_template!(LIST_SOURCES, r#"
SELECT ?source ?label (COUNT(DISTINCT ?entity) AS ?total)
WHERE {
    ?source a jp:Source ;
            rdfs:label ?label .
    FILTER(CONTAINS(STR(?source), "Source_"))
    OPTIONAL { ?entity jp:hasSource ?source }
}
GROUP BY ?source ?label
ORDER BY ?label ?source
"#);

// Geo export

sparql_template!(GET_GEO_JSON, "
SELECT DISTINCT ?person ?personLabel ?place ?placeLabel ?lat ?long ?start ?end ?placeType
WHERE {
    ?person a jp:HistoricalPerson ;
            rdfs:label ?personLabel ;
            jp:hasPlaceRelation ?pr .
    ?pr jp:relatedPlace ?place .
    OPTIONAL { ?pr jp:placeType ?placeType }
    ?place rdfs:label ?placeLabel ;
           jp:latitude ?lat ;
           jp:longitude ?long .
    OPTIONAL {
        ?person jp:hasTimeRelation ?tr .
        OPTIONAL { ?tr jp:birthYear ?by }
        OPTIONAL { ?tr jp:deathYear ?dy }
    }
    OPTIONAL { ?pr jp:timeFrom ?tf }
    OPTIONAL { ?pr jp:timeUntil ?tu }
    BIND(COALESCE(?by, ?tf) AS ?start)
    BIND(COALESCE(?dy, ?tu) AS ?end)
    FILTER(BOUND(?start) || BOUND(?end))
    {source_filter}
}
ORDER BY ?person ?place ?start ?end ?placeType ?personLabel ?placeLabel ?lat ?long
");

// Network

sparql_template!(GET_NETWORK_NODES, "
SELECT ?s ?label ?type ?source
WHERE {
    ?s a ?type .
    OPTIONAL { ?s rdfs:label ?label }
    OPTIONAL { ?s jp:hasSource ?source }
    FILTER(?type IN (jp:HistoricalPerson, jp:HistoricalWork, jp:ScholarlyWork,
                     jp:Place, jp:Subject, jp:HistoricalLanguage))
    {source_filter}
}
ORDER BY ?s ?type ?label ?source
");

sparql_template!(GET_NETWORK_EDGES_DIRECT, "
SELECT ?s ?o
WHERE {
    ?s ?p ?o .
    FILTER(?p IN (jp:writtenBy, jp:aboutPerson, jp:aboutWork, jp:hasSubject,
                  jp:writtenInLanguage, jp:mentionsPerson, jp:mentionsWork))
}
ORDER BY ?s ?p ?o
");

sparql_template!(GET_NETWORK_EDGES_PLACES, "
SELECT ?s ?o
WHERE {
    ?s jp:hasPlaceRelation ?rel .
    ?rel jp:relatedPlace ?o .
}
ORDER BY ?s ?o ?rel
");

// Ontology

sparql_template!(GET_ONTOLOGY_CLASSES, r#"
SELECT ?uri ?label ?comment
WHERE {
    ?uri a owl:Class .
    OPTIONAL { ?uri rdfs:label ?label }
    OPTIONAL { ?uri rdfs:comment ?comment }
    FILTER(STRSTARTS(STR(?uri), "http://jewish_philosophy.org/ontology#"))
}
ORDER BY ?uri ?label ?comment
"#);

sparql_template!(GET_ONTOLOGY_PROPERTIES, r#"
SELECT ?uri ?label ?domain ?range
WHERE {
    ?uri a owl:ObjectProperty .
    OPTIONAL { ?uri rdfs:label ?label }
    OPTIONAL { ?uri rdfs:domain ?domain }
    OPTIONAL { ?uri rdfs:range ?range }
    FILTER(STRSTARTS(STR(?uri), "http://jewish_philosophy.org/ontology#"))
}
ORDER BY ?uri ?domain ?range ?label
"#);

sparql_template!(GET_DEFINED_PROPERTIES, r#"
SELECT DISTINCT ?uri
WHERE {
    ?uri a ?kind .
    FILTER(?kind IN (owl:ObjectProperty, owl:DatatypeProperty))
    FILTER(STRSTARTS(STR(?uri), "http://jewish_philosophy.org/ontology#"))
}
"#);

sparql_template!(GET_DATA_CLASSES, r#"
SELECT DISTINCT ?uri
WHERE {
    ?s a ?uri .
    FILTER(STRSTARTS(STR(?uri), "http://jewish_philosophy.org/ontology#"))
}
"#);

sparql_template!(GET_DATA_PROPERTIES, r#"
SELECT DISTINCT ?uri
WHERE {
    ?s ?uri ?o .
    FILTER(STRSTARTS(STR(?uri), "http://jewish_philosophy.org/ontology#"))
}
"#);

// Stats

sparql_template!(COUNT_PERSONS, "
SELECT (COUNT(DISTINCT ?s) AS ?total) WHERE { ?s a jp:HistoricalPerson . {source_filter} }
");

sparql_template!(COUNT_WORKS, "
SELECT (COUNT(DISTINCT ?s) AS ?total) WHERE { ?s a jp:HistoricalWork . {source_filter} }
");

sparql_template!(COUNT_SCHOLARLY, "
SELECT (COUNT(DISTINCT ?s) AS ?total) WHERE { ?s a jp:ScholarlyWork . {source_filter} }
");

sparql_template!(COUNT_PLACES, "
SELECT (COUNT(DISTINCT ?s) AS ?total) WHERE { ?s a jp:Place . {source_filter} }
");

sparql_template!(COUNT_SUBJECTS, "
SELECT (COUNT(DISTINCT ?s) AS ?total) WHERE { ?s a jp:Subject . {source_filter} }
");

sparql_template!(COUNT_LANGUAGES, "
SELECT (COUNT(DISTINCT ?s) AS ?total) WHERE { ?s a jp:HistoricalLanguage . {source_filter} }
");

sparql_template!(COUNT_SOURCES, "
SELECT (COUNT(DISTINCT ?s) AS ?total) WHERE { ?s a jp:Source }
");

/// Every template in the catalog.
pub const ALL: &[Template] = &[
    LIST_PERSONS,
    LIST_PERSONS_WORKS,
    LIST_PERSONS_PLACES,
    LIST_PERSONS_TIMES,
    LIST_PERSONS_MENTIONS,
    GET_PERSON_WORKS,
    GET_PERSON_SCHOLARLY,
    GET_PERSON_PLACES,
    GET_PERSON_TIMES,
    LIST_WORKS,
    LIST_WORKS_AUTHORS,
    LIST_WORKS_MENTIONS,
    GET_WORK_AUTHORS,
    GET_WORK_SCHOLARLY,
    LIST_PLACES,
    LIST_PLACES_PEOPLE,
    GET_PLACE_PEOPLE,
    LIST_SUBJECTS,
    LIST_SUBJECTS_WORKS,
    GET_SUBJECT_WORKS,
    LIST_LANGUAGES,
    LIST_LANGUAGES_WORKS,
    GET_LANGUAGE_WORKS,
    LIST_SCHOLARLY,
    LIST_SCHOLARLY_AUTHORS,
    LIST_SCHOLARLY_SOURCES,
    LIST_SCHOLARLY_PERSON_MENTIONS,
    LIST_SCHOLARLY_WORK_MENTIONS,
    LIST_SOURCES,
    GET_GEO_JSON,
    GET_NETWORK_NODES,
    GET_NETWORK_EDGES_DIRECT,
    GET_NETWORK_EDGES_PLACES,
    GET_ONTOLOGY_CLASSES,
    GET_ONTOLOGY_PROPERTIES,
    GET_DEFINED_PROPERTIES,
    GET_DATA_CLASSES,
    GET_DATA_PROPERTIES,
    COUNT_PERSONS,
    COUNT_WORKS,
    COUNT_SCHOLARLY,
    COUNT_PLACES,
    COUNT_SUBJECTS,
    COUNT_LANGUAGES,
    COUNT_SOURCES,
];

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::filter::build_filter;
    use crate::graph::backends::oxigraph::OxigraphClient;
    use crate::graph::QueryExt;

    #[test]
    fn test_render_inserts_fragment() {
        let rendered = LIST_PERSONS.render("?uri jp:hasSource jp:Source_X .").unwrap();
        assert!(rendered.contains("?uri jp:hasSource jp:Source_X ."));
        assert!(!rendered.contains(SOURCE_FILTER));
    }

    #[test]
    fn test_render_empty_fragment_removes_placeholder() {
        let rendered = LIST_WORKS.render("").unwrap();
        assert!(!rendered.contains(SOURCE_FILTER));
    }

    #[test]
    fn test_filter_on_unfilterable_template_fails() {
        assert!(!COUNT_SOURCES.is_filterable());
        let fragment = build_filter(Some("Source_X"), "s");
        let err = COUNT_SOURCES.render(&fragment).unwrap_err();
        assert!(matches!(err, AppError::Query { .. }));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = ALL.iter().map(Template::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    /// Every template must parse and run, with and without a filter.
    #[tokio::test]
    async fn test_every_template_executes() {
        let client = OxigraphClient::in_memory(Duration::from_secs(5)).unwrap();
        for template in ALL {
            let mut variants = vec![template.unfiltered()];
            if template.is_filterable() {
                let var = filter_variable(template);
                variants.push(template.render(&build_filter(Some("Source_X"), var)).unwrap());
            }

            for text in variants {
                let mut query = client.query(&text);
                for param in ["person", "work", "place", "subject", "language"] {
                    if text.contains(&format!("${param}")) {
                        query = query.param_iri(param, "http://jewish_philosophy.org/ontology#X");
                    }
                }
                let result = query.fetch_all().await;
                assert!(result.is_ok(), "{} failed: {:?}", template.name(), result.err());
            }
        }
    }

    fn filter_variable(template: &Template) -> &'static str {
        let text = template.unfiltered().replace("SELECT DISTINCT", "SELECT");
        ["?uri", "?person", "?work", "?place", "?subject", "?language", "?sw", "?s"]
            .into_iter()
            .find(|v| text.contains(&format!("SELECT {v} ")) || text.contains(&format!("SELECT {v}\n")))
            .map(|v| &v[1..])
            .unwrap_or("s")
    }
}
