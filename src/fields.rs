//! Tree and branch names of the reconstructed-event tree

/// Tree written by the profile-reconstruction pass
pub const DEFAULT_TREE_NAME: &str = "mdps5";

/// Leaf whose per-event value selects the sub-value of the other leaves
pub const INDEX_FIELD: &str = "iminc";

/// Per-mirror leaves, always read at sub-value 0 instead of `iminc`
pub const SPECIAL_FIELDS: [&str; 3] = ["mir_ngtube", "mir_id", "mir_nmir"];

/// Columns written to the CSV, in output order
pub const DEFAULT_FIELDS: [&str; 24] = [
    // ps4fit
    "xcore", // core x position
    "ycore", // core y position
    "th",    // shower track zenith angle
    "phi",   // azimuthal angle
    "rp",    // magnitude of rp vector
    "psi",   // psi angle
    "en",    // shower energy (EeV)
    "x0",    // G-H fit parameter (g/cm^2)
    "xf",    // depth of first seen point
    "xm",    // depth of shower max
    "dxm",   // error on xmax
    "c2t",   // chi^2 of timing fit
    "c2p",   // chi^2 of profile fit
    "xl",    // depth of last seen point (xl - xf = track length)
    "sz",    // shower size / 1e9
    "fscin", // fraction of scintillation light
    "fckov", // fraction of cherenkov light
    "fscat", // fraction of scattered light
    // mir_view
    "mir_id",     // mirror id
    "mir_nmir",   // number of mirrors in event
    "mir_ngtube", // number of good tubes in event
    // ps4fit
    "ra",  // right ascension
    "dec", // declination
    // ps4mc
    "mcip", // primary id: 1=proton, 2=iron, 3=photon, 4=helium, 5=nitrogen
];

/// Whether `field` is read at sub-value 0 regardless of `iminc`
pub fn is_special_field(field: &str) -> bool {
    SPECIAL_FIELDS.contains(&field)
}

/// Default field list as owned strings
pub fn default_fields() -> Vec<String> {
    DEFAULT_FIELDS.iter().map(|f| f.to_string()).collect()
}
