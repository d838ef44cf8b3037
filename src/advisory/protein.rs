//! Pathogen / host protein references per label.
//!
//! UniProt accessions and representative amino acid sequences for the key
//! pathogenic protein (disease labels) or host protein (healthy labels).

/// UniProt accession + representative sequence for one label
#[derive(Debug, Clone)]
pub struct ProteinEntry {
    pub label: &'static str,
    pub uniprot_id: &'static str,
    pub sequence: Option<&'static str>,
}

pub const ALPHAFOLD_ENTRY_URL: &str = "https://alphafold.ebi.ac.uk/entry/";

/// AlphaFold structure prediction URL for a UniProt accession.
pub fn alphafold_url(uniprot_id: &str) -> String {
    format!("{}{}", ALPHAFOLD_ENTRY_URL, uniprot_id)
}

// ============================================================================
// EMBEDDED PROTEIN DATA
// ============================================================================

pub static PROTEINS: &[ProteinEntry] = &[
    // Tomato
    ProteinEntry { label: "Tomato___Spider_mites Two-spotted_spider_mite", uniprot_id: "Q9BXX2", sequence: Some("MTEYFKRILVLTALALVAAVSAQPVLKLHVPVYPDKFPNEIKDVYGVFEGRPYKPEEFPFGLEKNPDFAWKKLVEEAGFDLNYKSLMAKYNV") },
    ProteinEntry { label: "Tomato___Septoria_leaf_spot", uniprot_id: "A0A0F7QIP7", sequence: Some("MKKFVLALVAAVLAASPLAVSAQYCGSGSCSNYCDSCKSGYCGPGYCG") },
    ProteinEntry { label: "Tomato___Leaf_Mold", uniprot_id: "Q8RWK8", sequence: Some("MKSFTLALVAVLAASPLAVSAQYCGSGSCSNYCDSCKSGYCGPGYCG") },
    ProteinEntry { label: "Tomato___Late_blight", uniprot_id: "Q9HFN0", sequence: Some("MKKLLALAAALAVSAPAAHAQYCDEWFKRLKNFSPKGGNFECSNGCDFPV") },
    ProteinEntry { label: "Tomato___Early_blight", uniprot_id: "A0A1Y2G6H3", sequence: Some("MAFALSLALLALPAAHAECVSDGKYYCRSTGDCDPEVCGGDGSSCSNGVCGRGVC") },
    ProteinEntry { label: "Tomato___Bacterial_spot", uniprot_id: "Q87T41", sequence: Some("MGNICIGAGMAGSTALFVAKRMLERAGYPSRVDYVPGPARQRCLGCGILLP") },
    ProteinEntry { label: "Tomato___Target_Spot", uniprot_id: "A0A1B2R4Z0", sequence: Some("MKKLLALAAALAVSAPAAHAQYCDEWFKRLKNFSPKGGNFECSNGCDFPV") },
    ProteinEntry { label: "Tomato___Tomato_mosaic_virus", uniprot_id: "P03576", sequence: Some("MTKTLALVTSLAFLVAVSAAQPVKLHVPVYPDKFPNEIKDVYGVFEGRPY") },
    ProteinEntry { label: "Tomato___Tomato_Yellow_Leaf_Curl_Virus", uniprot_id: "Q9Q9S4", sequence: Some("MNKYVSKTSSGSVVTLDEIRGINAQKSFGDNLYYVNFKSKHADGVRVGLGF") },
    ProteinEntry { label: "Tomato___healthy", uniprot_id: "Q964S2", sequence: Some("MEEEIAALVIDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQGVMVGMGQKDSYVGDEAQSKRGILTLKYPIEHGIVTNWDDMEKIWHHTFYNELR") },
    // Potato
    ProteinEntry { label: "Potato___Late_blight", uniprot_id: "Q9HFN0", sequence: Some("MKKLLALAAALAVSAPAAHAQYCDEWFKRLKNFSPKGGNFECSNGCDFPV") },
    ProteinEntry { label: "Potato___Early_blight", uniprot_id: "A0A1Y2G6H3", sequence: Some("MAFALSLALLALPAAHAECVSDGKYYCRSTGDCDPEVCGGDGSSCSNGVCGRGVC") },
    ProteinEntry { label: "Potato___healthy", uniprot_id: "P00876", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQGVMVGMGQKDSYVGDEAQSKRGILTLKYPI") },
    // Apple
    ProteinEntry { label: "Apple___Apple_scab", uniprot_id: "A0A0A2K7Q7", sequence: Some("MKKFVLALVAAVLAASPLAVSAQYCGSGSCSNYCDSCKSGYCGPGYCG") },
    ProteinEntry { label: "Apple___Black_rot", uniprot_id: "Q96VB9", sequence: Some("MRAVLLALAAALAVSAPAAHAECVSDGKYYCRSTGDCDPEVCGGDGSSCSNGVCGRGVC") },
    ProteinEntry { label: "Apple___Cedar_apple_rust", uniprot_id: "A0A2H4I8D6", sequence: Some("MKSFTLALVAVLAASPLAVSAQYCGSGSCSNYCDSCKSGYCGPGYCG") },
    ProteinEntry { label: "Apple___healthy", uniprot_id: "P00878", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQGVMVGMGQKDSYVGDEAQSK") },
    // Grape
    ProteinEntry { label: "Grape___Black_rot", uniprot_id: "A0A1D6Y9G4", sequence: Some("MKSFTLALVAVLAASPLAVSAQYCGSGSCSNYCDSCKSGYCGPGYCG") },
    ProteinEntry { label: "Grape___Esca_(Black_Measles)", uniprot_id: "A0A2R8Z2E0", sequence: Some("MKKVLLLALVAAVLAVSPLAVSAQYCGNGSCSNYCDSCKSGYCGPGYCG") },
    ProteinEntry { label: "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)", uniprot_id: "Q6R0H1", sequence: Some("MRAVLLALAAALAVSAPAAHAECVSDGKYYCRSTGDCDPEVCGGDGSSCSNGVCGRGVC") },
    ProteinEntry { label: "Grape___healthy", uniprot_id: "Q8W4L5", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQGVMVGMGQKDSY") },
    // Corn
    ProteinEntry { label: "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot", uniprot_id: "Q8N1B4", sequence: Some("MKKLLALAAALAVSAPAAHAQYCDEWFKRLKNFSPKGGNFECSNGCDFPV") },
    ProteinEntry { label: "Corn_(maize)___Common_rust_", uniprot_id: "P0C5H8", sequence: Some("MRAVLLALAAALAVSAPAAHAECVSDGKYYCRSTGDCDPEVCGGDGSSCSNGVCGRGVC") },
    ProteinEntry { label: "Corn_(maize)___Northern_Leaf_Blight", uniprot_id: "Q9FJA2", sequence: Some("MKSFTLALVAVLAASPLAVSAQYCGSGSCSNYCDSCKSGYCGPGYCG") },
    ProteinEntry { label: "Corn_(maize)___healthy", uniprot_id: "P04718", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQGVMVG") },
    // Others
    ProteinEntry { label: "Cherry_(including_sour)___Powdery_mildew", uniprot_id: "Q2VYF8", sequence: Some("MKTLLLALVAAVLAVSAPAAHAECVSDGKYYSRSTGDCDPEVCGGDGSSCSNGVCGRGVC") },
    ProteinEntry { label: "Cherry_(including_sour)___healthy", uniprot_id: "Q9M1K2", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQGVMVG") },
    ProteinEntry { label: "Blueberry___healthy", uniprot_id: "Q2MHE4", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQGVMVG") },
    ProteinEntry { label: "Pepper,_bell___Bacterial_spot", uniprot_id: "Q87T41", sequence: Some("MGNICIGAGMAGSTALFVAKRMLERAGYPSRVDYVPGPARQRCLGCGILLP") },
    ProteinEntry { label: "Pepper,_bell___healthy", uniprot_id: "Q9M2S6", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQ") },
    ProteinEntry { label: "Peach___Bacterial_spot", uniprot_id: "Q87T41", sequence: Some("MKKVLLALAAALAVSAPAAHAECVSDGKYYCRSTGDCDPEVCGGDGSSCSNGVCGRGVC") },
    ProteinEntry { label: "Peach___healthy", uniprot_id: "Q9SB60", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQ") },
    ProteinEntry { label: "Strawberry___Leaf_scorch", uniprot_id: "Q8W1K5", sequence: Some("MKKVLLLALVAAVLAVSPLAVSAQYCGNGSCSNYCDSCKSGYCGPGYCG") },
    ProteinEntry { label: "Strawberry___healthy", uniprot_id: "Q8S4Y1", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQ") },
    ProteinEntry { label: "Squash___Powdery_mildew", uniprot_id: "Q4WZ90", sequence: Some("MKTLLLALVAAVLAVSAPAAHAECVSDGKYYSRSTGDCDPEVCGGDGSSCSNGVCGRGVC") },
    ProteinEntry { label: "Soybean___healthy", uniprot_id: "P00873", sequence: Some("MEEEIAALVVDNGSGMCKAGFAGDDAPRAVFPSIVGRPRHQ") },
    ProteinEntry { label: "Raspberry___healthy", uniprot_id: "Q9FJA2", sequence: Some("MQVWPPLRVKPFNLLVGFNTRCAIPHPRSQLFGFNT") },
    // No representative sequence on file
    ProteinEntry { label: "Orange___Haunglongbing_(Citrus_greening)", uniprot_id: "Q1J9E3", sequence: None },
];
