use crate::error::{FloraError, Result};
use crate::types::{FloraDocument, GenomeRecord, LinkRecord, QueryPair};
use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Default)]
struct PartialLink {
    target: Option<String>,
    adaptation_factor: Option<String>,
}

#[derive(Default)]
struct PartialGenome {
    id: Option<String>,
    evolution_factor: Option<String>,
    links: Vec<LinkRecord>,
}

#[derive(Default)]
struct PartialPair {
    first_id: Option<String>,
    second_id: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PairSection {
    None,
    Evolution,
    Adaptation,
}

/// Parse a flora XML document.
///
/// Elements are matched by local name wherever they are nested, so
/// `<links>`/`<genomes>` wrappers are optional. `<pair>` elements outside
/// `<possibleEvolutionPairs>`/`<possibleAdaptationPairs>` are ignored.
/// When a field repeats, its first occurrence is used.
pub fn parse_xml(xml: &str) -> Result<FloraDocument> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut document = FloraDocument::default();
    let mut section = PairSection::None;
    let mut genome: Option<PartialGenome> = None;
    let mut link: Option<PartialLink> = None;
    let mut pair: Option<PartialPair> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                match e.local_name().as_ref() {
                    b"genome" => genome = Some(PartialGenome::default()),
                    b"link" if genome.is_some() => link = Some(PartialLink::default()),
                    b"possibleEvolutionPairs" => section = PairSection::Evolution,
                    b"possibleAdaptationPairs" => section = PairSection::Adaptation,
                    b"pair" if section != PairSection::None => pair = Some(PartialPair::default()),
                    _ => {}
                }
                text.clear();
            }
            Event::Empty(e) => {
                // `<genome/>`, `<link/>` or `<pair/>` still counts, and fails on its missing fields
                match e.local_name().as_ref() {
                    b"genome" => {
                        let record = finish_genome(PartialGenome::default(), document.genomes.len())?;
                        document.genomes.push(record);
                    }
                    b"link" if genome.is_some() => {
                        if let Some(owner) = genome.as_mut() {
                            let record = finish_link(PartialLink::default(), owner)?;
                            owner.links.push(record);
                        }
                    }
                    b"pair" if section != PairSection::None => {
                        push_pair(&mut document, section, PartialPair::default())?;
                    }
                    _ => {}
                }
            }
            Event::Text(t) => {
                let unescaped = t
                    .unescape()
                    .map_err(|e| FloraError::DataLoading(format!("Invalid XML text: {}", e)))?;
                text.push_str(&unescaped);
            }
            Event::CData(c) => {
                text.push_str(&String::from_utf8_lossy(&c.into_inner()));
            }
            Event::End(e) => {
                let value = text.trim().to_string();
                text.clear();

                match e.local_name().as_ref() {
                    b"genome" => {
                        if let Some(partial) = genome.take() {
                            let record = finish_genome(partial, document.genomes.len())?;
                            document.genomes.push(record);
                        }
                        link = None;
                    }
                    b"link" => {
                        if let (Some(partial), Some(owner)) = (link.take(), genome.as_mut()) {
                            let record = finish_link(partial, owner)?;
                            owner.links.push(record);
                        }
                    }
                    b"pair" => {
                        if let Some(partial) = pair.take() {
                            push_pair(&mut document, section, partial)?;
                        }
                    }
                    b"possibleEvolutionPairs" | b"possibleAdaptationPairs" => {
                        section = PairSection::None;
                    }
                    b"target" => set_first(link.as_mut().map(|l| &mut l.target), value),
                    b"adaptationFactor" => {
                        set_first(link.as_mut().map(|l| &mut l.adaptation_factor), value)
                    }
                    b"id" if link.is_none() => {
                        set_first(genome.as_mut().map(|g| &mut g.id), value)
                    }
                    b"evolutionFactor" if link.is_none() => {
                        set_first(genome.as_mut().map(|g| &mut g.evolution_factor), value)
                    }
                    b"firstId" => set_first(pair.as_mut().map(|p| &mut p.first_id), value),
                    b"secondId" => set_first(pair.as_mut().map(|p| &mut p.second_id), value),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!(
        "Parsed XML document: {} genomes, {} evolution pairs, {} adaptation pairs",
        document.genomes.len(),
        document.evolution_pairs.len(),
        document.adaptation_pairs.len()
    );
    Ok(document)
}

fn set_first(slot: Option<&mut Option<String>>, value: String) {
    if let Some(slot) = slot {
        if slot.is_none() {
            *slot = Some(value);
        }
    }
}

fn parse_int(raw: &str, what: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| {
        FloraError::MalformedInput(format!("{} '{}' is not an integer", what, raw))
    })
}

fn finish_genome(partial: PartialGenome, position: usize) -> Result<GenomeRecord> {
    let id = partial.id.ok_or_else(|| {
        FloraError::MalformedInput(format!("Genome #{} is missing <id>", position))
    })?;
    let raw_factor = partial.evolution_factor.ok_or_else(|| {
        FloraError::MalformedInput(format!("Genome '{}' is missing <evolutionFactor>", id))
    })?;
    let evolution_factor = parse_int(&raw_factor, "evolutionFactor")?;

    Ok(GenomeRecord {
        id,
        evolution_factor,
        links: partial.links,
    })
}

fn finish_link(partial: PartialLink, owner: &PartialGenome) -> Result<LinkRecord> {
    let owner_id = owner.id.as_deref().unwrap_or("?");
    let target_id = partial.target.ok_or_else(|| {
        FloraError::MalformedInput(format!("Link of genome '{}' is missing <target>", owner_id))
    })?;
    let raw_factor = partial.adaptation_factor.ok_or_else(|| {
        FloraError::MalformedInput(format!(
            "Link {} -> {} is missing <adaptationFactor>",
            owner_id, target_id
        ))
    })?;

    Ok(LinkRecord {
        adaptation_factor: parse_int(&raw_factor, "adaptationFactor")?,
        target_id,
    })
}

fn push_pair(document: &mut FloraDocument, section: PairSection, partial: PartialPair) -> Result<()> {
    let (Some(first_id), Some(second_id)) = (partial.first_id, partial.second_id) else {
        return Err(FloraError::MalformedInput(
            "Pair is missing <firstId> or <secondId>".to_string(),
        ));
    };
    let pair = QueryPair { first_id, second_id };
    match section {
        PairSection::Evolution => document.evolution_pairs.push(pair),
        PairSection::Adaptation => document.adaptation_pairs.push(pair),
        PairSection::None => {}
    }
    Ok(())
}
