//! Closed vocabularies of the GenBank format.
//!
//! GenBank classifies lines by recognizing fixed keyword sets rather than
//! delimiters. The sets live here as explicit const tables with membership
//! checks so that unknown-but-well-formed entries degrade to
//! "unrecognized" instead of failing the parse.

/// The 18 GenBank division codes classifying the submitting collection.
pub const GENBANK_DIVISIONS: [&str; 18] = [
    "PRI", // primate sequences
    "ROD", // rodent sequences
    "MAM", // other mammalian sequences
    "VRT", // other vertebrate sequences
    "INV", // invertebrate sequences
    "PLN", // plant, fungal, and algal sequences
    "BCT", // bacterial sequences
    "VRL", // viral sequences
    "PHG", // bacteriophage sequences
    "SYN", // synthetic sequences
    "UNA", // unannotated sequences
    "EST", // expressed sequence tags
    "PAT", // patent sequences
    "STS", // sequence tagged sites
    "GSS", // genome survey sequences
    "HTG", // high-throughput genomic sequences
    "HTC", // unfinished high-throughput cDNA sequencing
    "ENV", // environmental sampling sequences
];

/// Top-level record-section keywords, always beginning at column 0.
pub const TOP_LEVEL_KEYWORDS: [&str; 9] = [
    "LOCUS",
    "DEFINITION",
    "ACCESSION",
    "VERSION",
    "KEYWORDS",
    "SOURCE",
    "REFERENCE",
    "FEATURES",
    "ORIGIN",
];

/// Sub-level keywords recognized inside REFERENCE blocks.
pub const REFERENCE_SUB_KEYS: [&str; 5] = ["AUTHORS", "TITLE", "JOURNAL", "PUBMED", "REMARK"];

/// Gene feature types of the feature table.
pub const GENE_FEATURE_TYPES: [&str; 52] = [
    "assembly_gap",
    "C_region",
    "CDS",
    "centromere",
    "D-loop",
    "D_segment",
    "exon",
    "gap",
    "gene",
    "iDNA",
    "intron",
    "J_segment",
    "mat_peptide",
    "misc_binding",
    "misc_difference",
    "misc_feature",
    "misc_recomb",
    "misc_RNA",
    "misc_structure",
    "mobile_element",
    "modified_base",
    "mRNA",
    "ncRNA",
    "N_region",
    "old_sequence",
    "operon",
    "oriT",
    "polyA_site",
    "precursor_RNA",
    "prim_transcript",
    "primer_bind",
    "propeptide",
    "protein_bind",
    "regulatory",
    "repeat_region",
    "rep_origin",
    "rRNA",
    "S_region",
    "sig_peptide",
    "source",
    "stem_loop",
    "STS",
    "telomere",
    "tmRNA",
    "transit_peptide",
    "tRNA",
    "unsure",
    "V_region",
    "V_segment",
    "variation",
    "3'UTR",
    "5'UTR",
];

/// Feature qualifier keys, stored bare (no `/` prefix or `=` suffix).
pub const QUALIFIER_KEYS: [&str; 100] = [
    "allele",
    "altitude",
    "anticodon",
    "artificial_location",
    "bio_material",
    "bound_moiety",
    "cell_line",
    "cell_type",
    "chromosome",
    "citation",
    "clone",
    "clone_lib",
    "codon_start",
    "collected_by",
    "collection_date",
    "compare",
    "country",
    "cultivar",
    "culture_collection",
    "db_xref",
    "dev_stage",
    "direction",
    "EC_number",
    "ecotype",
    "environmental_sample",
    "estimated_length",
    "exception",
    "experiment",
    "focus",
    "frequency",
    "function",
    "gap_type",
    "gene",
    "gene_synonym",
    "germline",
    "haplogroup",
    "haplotype",
    "host",
    "identified_by",
    "inference",
    "isolate",
    "isolation_source",
    "lab_host",
    "lat_lon",
    "linkage_evidence",
    "locus_tag",
    "macronuclear",
    "map",
    "mating_type",
    "metagenome_source",
    "mobile_element_type",
    "mod_base",
    "mol_type",
    "ncRNA_class",
    "note",
    "number",
    "old_locus_tag",
    "operon",
    "organelle",
    "organism",
    "partial",
    "PCR_conditions",
    "PCR_primers",
    "phenotype",
    "plasmid",
    "pop_variant",
    "product",
    "protein_id",
    "proviral",
    "pseudo",
    "pseudogene",
    "rearranged",
    "replace",
    "ribosomal_slippage",
    "rpt_family",
    "rpt_type",
    "rpt_unit_range",
    "rpt_unit_seq",
    "satellite",
    "segment",
    "serotype",
    "serovar",
    "sex",
    "specimen_voucher",
    "standard_name",
    "strain",
    "sub_clone",
    "submitter_seqid",
    "sub_species",
    "sub_strain",
    "tag_peptide",
    "tissue_lib",
    "tissue_type",
    "transgenic",
    "translation",
    "transl_except",
    "transl_table",
    "trans_splicing",
    "type_material",
    "variety",
];

/// True when `code` is one of the 18 GenBank division codes.
pub fn is_genbank_division(code: &str) -> bool {
    GENBANK_DIVISIONS.contains(&code.trim())
}

/// True when `token` is a top-level record-section keyword.
pub fn is_top_level_keyword(token: &str) -> bool {
    TOP_LEVEL_KEYWORDS.contains(&token.trim())
}

/// True when `token` is a REFERENCE sub-level keyword.
pub fn is_reference_sub_key(token: &str) -> bool {
    REFERENCE_SUB_KEYS.contains(&token.trim())
}

/// True when `name` is a known gene feature type.
pub fn is_gene_feature_type(name: &str) -> bool {
    GENE_FEATURE_TYPES.contains(&name.trim())
}

/// True when `key` is a known qualifier key.
pub fn is_qualifier_key(key: &str) -> bool {
    QUALIFIER_KEYS.contains(&key.trim())
}
