use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

use crate::common::error::DiffError;
use crate::common::result::{DiffResult, OptionExt, ResultExt};
use crate::domain::entities::manifest::{LinkFile, Manifest, ManifestDefault, Project, Remote};

/// Parser for git-repo style XML manifests
///
/// Only the elements that carry revision data are interpreted. Anything
/// else inside the root is skipped together with its children.
pub struct ManifestParser;

impl ManifestParser {
    /// Parse a manifest document from a string
    pub fn parse_str(xml: &str) -> DiffResult<Manifest> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut builder = ManifestBuilder::default();

        loop {
            let position = reader.buffer_position();
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    builder.open(e, position)?;
                }
                Ok(Event::Empty(ref e)) => {
                    builder.open(e, position)?;
                    if builder.close() {
                        break;
                    }
                }
                Ok(Event::End(_)) => {
                    if builder.close() {
                        break;
                    }
                }
                Ok(Event::Eof) => {
                    return Err(builder.unexpected_eof(reader.buffer_position()));
                }
                Err(e) => {
                    return Err(DiffError::parse_error_with_source(
                        "Malformed XML",
                        Some(reader.error_position()),
                        e,
                    ));
                }
                _ => {}
            }
        }

        builder.finish()
    }
}

/// Tracks where the reader is inside the document while elements stream past
#[derive(Default)]
struct ManifestBuilder {
    manifest: Option<Manifest>,
    depth: usize,
    current_project: Option<Project>,
}

impl ManifestBuilder {
    fn open(&mut self, e: &BytesStart, position: u64) -> DiffResult<()> {
        let name = e.name();
        match (self.depth, name.as_ref()) {
            (0, b"manifest") => self.manifest = Some(Manifest::default()),
            (0, other) => {
                return Err(DiffError::parse_error(
                    format!(
                        "expected root element <manifest>, found <{}>",
                        String::from_utf8_lossy(other)
                    ),
                    Some(position),
                ));
            }
            (1, b"remote") => {
                let remote = parse_remote(e, position)?;
                self.manifest_mut().remotes.push(remote);
            }
            (1, b"default") => {
                let default = parse_default(e, position)?;
                self.manifest_mut().default = Some(default);
            }
            (1, b"project") => {
                self.current_project = Some(parse_project(e, position)?);
            }
            (2, b"linkfile") => {
                if let Some(ref mut project) = self.current_project {
                    project.link_files.push(parse_linkfile(e, position)?);
                }
            }
            (_, other) => {
                trace!(
                    element = %String::from_utf8_lossy(other),
                    depth = self.depth,
                    "skipping element"
                );
            }
        }
        self.depth += 1;
        Ok(())
    }

    /// Close the innermost open element; returns true once the root is closed.
    fn close(&mut self) -> bool {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 1 {
            if let Some(project) = self.current_project.take() {
                self.manifest_mut().projects.push(project);
            }
        }
        self.depth == 0
    }

    fn manifest_mut(&mut self) -> &mut Manifest {
        self.manifest.get_or_insert_with(Manifest::default)
    }

    fn unexpected_eof(&self, position: u64) -> DiffError {
        if self.manifest.is_none() {
            DiffError::parse_error("document has no <manifest> element", Some(position))
        } else {
            DiffError::parse_error(
                "unexpected end of document: <manifest> is not closed",
                Some(position),
            )
        }
    }

    fn finish(self) -> DiffResult<Manifest> {
        self.manifest
            .ok_or_parse_error("document has no <manifest> element", None)
    }
}

fn get_attr(e: &BytesStart, name: &[u8], position: u64) -> DiffResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.with_parse_error("Invalid attribute", Some(position))?;
        if attr.key.as_ref() == name {
            let value = attr
                .unescape_value()
                .with_parse_error("Invalid attribute value", Some(position))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn require_attr(e: &BytesStart, name: &[u8], position: u64) -> DiffResult<String> {
    get_attr(e, name, position)?.ok_or_parse_error(
        format!(
            "<{}> is missing required attribute '{}'",
            String::from_utf8_lossy(e.name().as_ref()),
            String::from_utf8_lossy(name)
        ),
        Some(position),
    )
}

fn parse_remote(e: &BytesStart, position: u64) -> DiffResult<Remote> {
    Ok(Remote {
        fetch: get_attr(e, b"fetch", position)?.unwrap_or_default(),
        name: get_attr(e, b"name", position)?.unwrap_or_default(),
    })
}

fn parse_default(e: &BytesStart, position: u64) -> DiffResult<ManifestDefault> {
    Ok(ManifestDefault {
        remote: get_attr(e, b"remote", position)?,
        revision: get_attr(e, b"revision", position)?,
        sync_c: get_attr(e, b"sync-c", position)?,
        sync_tags: get_attr(e, b"sync-tags", position)?,
    })
}

fn parse_project(e: &BytesStart, position: u64) -> DiffResult<Project> {
    Ok(Project {
        name: require_attr(e, b"name", position)?,
        path: get_attr(e, b"path", position)?,
        revision: get_attr(e, b"revision", position)?,
        remote: get_attr(e, b"remote", position)?,
        upstream: get_attr(e, b"upstream", position)?,
        groups: get_attr(e, b"groups", position)?,
        link_files: Vec::new(),
    })
}

fn parse_linkfile(e: &BytesStart, position: u64) -> DiffResult<LinkFile> {
    Ok(LinkFile {
        dest: get_attr(e, b"dest", position)?.unwrap_or_default(),
        src: get_attr(e, b"src", position)?.unwrap_or_default(),
    })
}
