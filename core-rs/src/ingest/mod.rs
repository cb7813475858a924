/**
 * ingest module
 *
 * - record: CSV film rows (FilmRecord, FilmSource)
 * - parse: tolerant field parsers (digits, decimals, dates, name lists, writer credits)
 * - identity: IdentityCache mapping normalized names to resources
 * - ingester: RecordIngester asserting film individuals into an OntologyGraph
 */

pub mod identity;
pub mod ingester;
pub mod parse;
pub mod record;

pub use identity::IdentityCache;
pub use ingester::{IngestStats, RecordIngester};
pub use parse::{
    extract_int, is_absent, parse_decimal, parse_release_date, parse_whole, parse_writers,
    slugify, split_list, ReleaseDate, WriterCredit, WriterRole,
};
pub use record::{FilmRecord, FilmSource};
