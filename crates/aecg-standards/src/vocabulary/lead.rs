//! Lead vocabulary (`MDC_ECG_LEAD_*`).

use std::sync::LazyLock;

use super::{CodeIndex, Term};

static LEAD_INDEX: LazyLock<CodeIndex> =
    LazyLock::new(|| CodeIndex::new(LEAD_TERMS.iter().map(|term| term.code)));

/// Resolve a lead code to its label and description.
///
/// Returns `None` for codes outside the vocabulary.
pub fn lookup_lead(code: &str) -> Option<&'static Term> {
    LEAD_INDEX.position(code).map(|index| &LEAD_TERMS[index])
}

/// All lead terms in vocabulary order.
pub fn lead_terms() -> impl Iterator<Item = &'static Term> {
    LEAD_TERMS.iter()
}

const LEAD_TERMS: &[Term] = &[
    Term {
        code: "MDC_ECG_LEAD_CONFIG",
        label: "CONFIG",
        description: "Unspecified lead",
    },
    Term {
        code: "MDC_ECG_LEAD_I",
        label: "I",
        description: "Lead I (Einthoven, LA-RA)",
    },
    Term {
        code: "MDC_ECG_LEAD_II",
        label: "II",
        description: "Lead II (Einthoven, LL-RA)",
    },
    Term {
        code: "MDC_ECG_LEAD_V1",
        label: "V1",
        description: "Precordial lead V1",
    },
    Term {
        code: "MDC_ECG_LEAD_V2",
        label: "V2",
        description: "Precordial lead V2",
    },
    Term {
        code: "MDC_ECG_LEAD_V3",
        label: "V3",
        description: "Precordial lead V3",
    },
    Term {
        code: "MDC_ECG_LEAD_V4",
        label: "V4",
        description: "Precordial lead V4",
    },
    Term {
        code: "MDC_ECG_LEAD_V5",
        label: "V5",
        description: "Precordial lead V5",
    },
    Term {
        code: "MDC_ECG_LEAD_V6",
        label: "V6",
        description: "Precordial lead V6",
    },
    Term {
        code: "MDC_ECG_LEAD_V7",
        label: "V7",
        description: "Precordial lead V7",
    },
    Term {
        code: "MDC_ECG_LEAD_V2R",
        label: "V2R",
        description: "Right precordial lead V2R",
    },
    Term {
        code: "MDC_ECG_LEAD_V3R",
        label: "V3R",
        description: "Right precordial lead V3R",
    },
    Term {
        code: "MDC_ECG_LEAD_V4R",
        label: "V4R",
        description: "Right precordial lead V4R",
    },
    Term {
        code: "MDC_ECG_LEAD_V5R",
        label: "V5R",
        description: "Right precordial lead V5R",
    },
    Term {
        code: "MDC_ECG_LEAD_V6R",
        label: "V6R",
        description: "Right precordial lead V6R",
    },
    Term {
        code: "MDC_ECG_LEAD_V7R",
        label: "V7R",
        description: "Right precordial lead V7R",
    },
    Term {
        code: "MDC_ECG_LEAD_X",
        label: "X",
        description: "Frank orthogonal lead X",
    },
    Term {
        code: "MDC_ECG_LEAD_Y",
        label: "Y",
        description: "Frank orthogonal lead Y",
    },
    Term {
        code: "MDC_ECG_LEAD_Z",
        label: "Z",
        description: "Frank orthogonal lead Z",
    },
    Term {
        code: "MDC_ECG_LEAD_CC5",
        label: "CC5",
        description: "Bipolar chest lead CC5 (V5R to V5)",
    },
    Term {
        code: "MDC_ECG_LEAD_CM5",
        label: "CM5",
        description: "Bipolar chest lead CM5 (manubrium to V5)",
    },
    Term {
        code: "MDC_ECG_LEAD_LA",
        label: "LA",
        description: "Left arm electrode",
    },
    Term {
        code: "MDC_ECG_LEAD_RA",
        label: "RA",
        description: "Right arm electrode",
    },
    Term {
        code: "MDC_ECG_LEAD_LL",
        label: "LL",
        description: "Left leg electrode",
    },
    Term {
        code: "MDC_ECG_LEAD_fI",
        label: "fI",
        description: "Frank electrode I",
    },
    Term {
        code: "MDC_ECG_LEAD_fE",
        label: "fE",
        description: "Frank electrode E",
    },
    Term {
        code: "MDC_ECG_LEAD_fC",
        label: "fC",
        description: "Frank electrode C",
    },
    Term {
        code: "MDC_ECG_LEAD_fA",
        label: "fA",
        description: "Frank electrode A",
    },
    Term {
        code: "MDC_ECG_LEAD_fM",
        label: "fM",
        description: "Frank electrode M",
    },
    Term {
        code: "MDC_ECG_LEAD_fF",
        label: "fF",
        description: "Frank electrode F",
    },
    Term {
        code: "MDC_ECG_LEAD_fH",
        label: "fH",
        description: "Frank electrode H",
    },
    Term {
        code: "MDC_ECG_LEAD_dI",
        label: "dI",
        description: "Derived lead I",
    },
    Term {
        code: "MDC_ECG_LEAD_dII",
        label: "dII",
        description: "Derived lead II",
    },
    Term {
        code: "MDC_ECG_LEAD_dV1",
        label: "dV1",
        description: "Derived precordial lead V1",
    },
    Term {
        code: "MDC_ECG_LEAD_dV2",
        label: "dV2",
        description: "Derived precordial lead V2",
    },
    Term {
        code: "MDC_ECG_LEAD_dV3",
        label: "dV3",
        description: "Derived precordial lead V3",
    },
    Term {
        code: "MDC_ECG_LEAD_dV4",
        label: "dV4",
        description: "Derived precordial lead V4",
    },
    Term {
        code: "MDC_ECG_LEAD_dV5",
        label: "dV5",
        description: "Derived precordial lead V5",
    },
    Term {
        code: "MDC_ECG_LEAD_dV6",
        label: "dV6",
        description: "Derived precordial lead V6",
    },
    Term {
        code: "MDC_ECG_LEAD_III",
        label: "III",
        description: "Lead III (Einthoven, LL-LA)",
    },
    Term {
        code: "MDC_ECG_LEAD_aVR",
        label: "aVR",
        description: "Augmented voltage lead aVR (right arm)",
    },
    Term {
        code: "MDC_ECG_LEAD_aVL",
        label: "aVL",
        description: "Augmented voltage lead aVL (left arm)",
    },
    Term {
        code: "MDC_ECG_LEAD_aVF",
        label: "aVF",
        description: "Augmented voltage lead aVF (left leg)",
    },
    Term {
        code: "MDC_ECG_LEAD_aVRneg",
        label: "-aVR",
        description: "Inverted augmented voltage lead aVR",
    },
    Term {
        code: "MDC_ECG_LEAD_V8",
        label: "V8",
        description: "Precordial lead V8",
    },
    Term {
        code: "MDC_ECG_LEAD_V9",
        label: "V9",
        description: "Precordial lead V9",
    },
    Term {
        code: "MDC_ECG_LEAD_V8R",
        label: "V8R",
        description: "Right precordial lead V8R",
    },
    Term {
        code: "MDC_ECG_LEAD_V9R",
        label: "V9R",
        description: "Right precordial lead V9R",
    },
    Term {
        code: "MDC_ECG_LEAD_D",
        label: "D",
        description: "Nehb lead D (dorsal)",
    },
    Term {
        code: "MDC_ECG_LEAD_A",
        label: "A",
        description: "Nehb lead A (anterior)",
    },
    Term {
        code: "MDC_ECG_LEAD_J",
        label: "J",
        description: "Nehb lead J (inferior)",
    },
    Term {
        code: "MDC_ECG_LEAD_Defib",
        label: "Defib",
        description: "Defibrillator lead (anterior-lateral)",
    },
    Term {
        code: "MDC_ECG_LEAD_Extern",
        label: "Extern",
        description: "External pacing lead (anterior-posterior)",
    },
    Term {
        code: "MDC_ECG_LEAD_A1",
        label: "A1",
        description: "Auxiliary unspecified lead 1",
    },
    Term {
        code: "MDC_ECG_LEAD_A2",
        label: "A2",
        description: "Auxiliary unspecified lead 2",
    },
    Term {
        code: "MDC_ECG_LEAD_A3",
        label: "A3",
        description: "Auxiliary unspecified lead 3",
    },
    Term {
        code: "MDC_ECG_LEAD_A4",
        label: "A4",
        description: "Auxiliary unspecified lead 4",
    },
    Term {
        code: "MDC_ECG_LEAD_A5",
        label: "A5",
        description: "Auxiliary unspecified lead 5",
    },
    Term {
        code: "MDC_ECG_LEAD_A6",
        label: "A6",
        description: "Auxiliary unspecified lead 6",
    },
    Term {
        code: "MDC_ECG_LEAD_A7",
        label: "A7",
        description: "Auxiliary unspecified lead 7",
    },
    Term {
        code: "MDC_ECG_LEAD_A8",
        label: "A8",
        description: "Auxiliary unspecified lead 8",
    },
    Term {
        code: "MDC_ECG_LEAD_C",
        label: "C",
        description: "Chest lead",
    },
    Term {
        code: "MDC_ECG_LEAD_V",
        label: "V",
        description: "Precordial lead (unspecified position)",
    },
    Term {
        code: "MDC_ECG_LEAD_VR",
        label: "VR",
        description: "Unipolar limb lead VR (right arm)",
    },
    Term {
        code: "MDC_ECG_LEAD_VL",
        label: "VL",
        description: "Unipolar limb lead VL (left arm)",
    },
    Term {
        code: "MDC_ECG_LEAD_VF",
        label: "VF",
        description: "Unipolar limb lead VF (left leg)",
    },
    Term {
        code: "MDC_ECG_LEAD_MCL",
        label: "MCL",
        description: "Modified chest lead (left arm indifferent)",
    },
    Term {
        code: "MDC_ECG_LEAD_MCL1",
        label: "MCL1",
        description: "Modified chest lead 1",
    },
    Term {
        code: "MDC_ECG_LEAD_MCL2",
        label: "MCL2",
        description: "Modified chest lead 2",
    },
    Term {
        code: "MDC_ECG_LEAD_MCL3",
        label: "MCL3",
        description: "Modified chest lead 3",
    },
    Term {
        code: "MDC_ECG_LEAD_MCL4",
        label: "MCL4",
        description: "Modified chest lead 4",
    },
    Term {
        code: "MDC_ECG_LEAD_MCL5",
        label: "MCL5",
        description: "Modified chest lead 5",
    },
    Term {
        code: "MDC_ECG_LEAD_MCL6",
        label: "MCL6",
        description: "Modified chest lead 6",
    },
    Term {
        code: "MDC_ECG_LEAD_CC",
        label: "CC",
        description: "Bipolar chest lead (chest to chest)",
    },
    Term {
        code: "MDC_ECG_LEAD_CC1",
        label: "CC1",
        description: "Bipolar chest lead CC1",
    },
    Term {
        code: "MDC_ECG_LEAD_CC2",
        label: "CC2",
        description: "Bipolar chest lead CC2",
    },
    Term {
        code: "MDC_ECG_LEAD_CC3",
        label: "CC3",
        description: "Bipolar chest lead CC3",
    },
    Term {
        code: "MDC_ECG_LEAD_CC4",
        label: "CC4",
        description: "Bipolar chest lead CC4",
    },
    Term {
        code: "MDC_ECG_LEAD_CC6",
        label: "CC6",
        description: "Bipolar chest lead CC6",
    },
    Term {
        code: "MDC_ECG_LEAD_CC7",
        label: "CC7",
        description: "Bipolar chest lead CC7",
    },
    Term {
        code: "MDC_ECG_LEAD_CM",
        label: "CM",
        description: "Bipolar chest lead (chest to manubrium)",
    },
    Term {
        code: "MDC_ECG_LEAD_CM1",
        label: "CM1",
        description: "Bipolar chest lead CM1",
    },
    Term {
        code: "MDC_ECG_LEAD_CM2",
        label: "CM2",
        description: "Bipolar chest lead CM2",
    },
    Term {
        code: "MDC_ECG_LEAD_CM3",
        label: "CM3",
        description: "Bipolar chest lead CM3",
    },
    Term {
        code: "MDC_ECG_LEAD_CM4",
        label: "CM4",
        description: "Bipolar chest lead CM4",
    },
    Term {
        code: "MDC_ECG_LEAD_CM6",
        label: "CM6",
        description: "Bipolar chest lead CM6",
    },
    Term {
        code: "MDC_ECG_LEAD_CM7",
        label: "CM7",
        description: "Bipolar chest lead CM7",
    },
    Term {
        code: "MDC_ECG_LEAD_CH5",
        label: "CH5",
        description: "Bipolar lead CH5 (head to V5)",
    },
    Term {
        code: "MDC_ECG_LEAD_CS5",
        label: "CS5",
        description: "Bipolar lead CS5 (right subclavicular to V5)",
    },
    Term {
        code: "MDC_ECG_LEAD_CB5",
        label: "CB5",
        description: "Bipolar lead CB5 (right scapula to V5)",
    },
    Term {
        code: "MDC_ECG_LEAD_CR5",
        label: "CR5",
        description: "Bipolar lead CR5 (right arm to V5)",
    },
    Term {
        code: "MDC_ECG_LEAD_ML",
        label: "ML",
        description: "Modified limb lead II",
    },
    Term {
        code: "MDC_ECG_LEAD_AB1",
        label: "AB1",
        description: "Auxiliary bipolar lead 1",
    },
    Term {
        code: "MDC_ECG_LEAD_AB2",
        label: "AB2",
        description: "Auxiliary bipolar lead 2",
    },
    Term {
        code: "MDC_ECG_LEAD_AB3",
        label: "AB3",
        description: "Auxiliary bipolar lead 3",
    },
    Term {
        code: "MDC_ECG_LEAD_AB4",
        label: "AB4",
        description: "Auxiliary bipolar lead 4",
    },
    Term {
        code: "MDC_ECG_LEAD_ES",
        label: "ES",
        description: "EASI lead ES",
    },
    Term {
        code: "MDC_ECG_LEAD_AS",
        label: "AS",
        description: "EASI lead AS",
    },
    Term {
        code: "MDC_ECG_LEAD_AI",
        label: "AI",
        description: "EASI lead AI",
    },
    Term {
        code: "MDC_ECG_LEAD_S",
        label: "S",
        description: "EASI upper sternum electrode S",
    },
    Term {
        code: "MDC_ECG_LEAD_dIII",
        label: "dIII",
        description: "Derived lead III",
    },
    Term {
        code: "MDC_ECG_LEAD_daVR",
        label: "daVR",
        description: "Derived augmented lead aVR",
    },
    Term {
        code: "MDC_ECG_LEAD_daVL",
        label: "daVL",
        description: "Derived augmented lead aVL",
    },
    Term {
        code: "MDC_ECG_LEAD_daVF",
        label: "daVF",
        description: "Derived augmented lead aVF",
    },
    Term {
        code: "MDC_ECG_LEAD_dV7",
        label: "dV7",
        description: "Derived precordial lead V7",
    },
    Term {
        code: "MDC_ECG_LEAD_dV8",
        label: "dV8",
        description: "Derived precordial lead V8",
    },
    Term {
        code: "MDC_ECG_LEAD_dV9",
        label: "dV9",
        description: "Derived precordial lead V9",
    },
    Term {
        code: "MDC_ECG_LEAD_dV3R",
        label: "dV3R",
        description: "Derived right precordial lead V3R",
    },
    Term {
        code: "MDC_ECG_LEAD_dV4R",
        label: "dV4R",
        description: "Derived right precordial lead V4R",
    },
    Term {
        code: "MDC_ECG_LEAD_dV5R",
        label: "dV5R",
        description: "Derived right precordial lead V5R",
    },
    Term {
        code: "MDC_ECG_LEAD_dV6R",
        label: "dV6R",
        description: "Derived right precordial lead V6R",
    },
    Term {
        code: "MDC_ECG_LEAD_RL",
        label: "RL",
        description: "Right leg electrode",
    },
    Term {
        code: "MDC_ECG_LEAD_CV5RL",
        label: "CV5RL",
        description: "Canine lead CV5RL (rV2)",
    },
    Term {
        code: "MDC_ECG_LEAD_CV6LL",
        label: "CV6LL",
        description: "Canine lead CV6LL (V2)",
    },
    Term {
        code: "MDC_ECG_LEAD_CV6LU",
        label: "CV6LU",
        description: "Canine lead CV6LU (V4)",
    },
    Term {
        code: "MDC_ECG_LEAD_V10",
        label: "V10",
        description: "Canine lead V10",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_ignoring_case() {
        assert_eq!(LEAD_INDEX.len(), LEAD_TERMS.len());
    }

    #[test]
    fn resolves_limb_and_precordial_leads() {
        assert_eq!(lookup_lead("MDC_ECG_LEAD_II").map(|t| t.label), Some("II"));
        assert_eq!(lookup_lead("MDC_ECG_LEAD_V6").map(|t| t.label), Some("V6"));
        assert_eq!(lookup_lead("MDC_ECG_LEAD_AVF").map(|t| t.label), Some("aVF"));
    }

    #[test]
    fn mixed_case_codes_do_not_collide() {
        let derived = lookup_lead("MDC_ECG_LEAD_dI").unwrap();
        let standard = lookup_lead("MDC_ECG_LEAD_I").unwrap();
        assert_ne!(derived.code, standard.code);
    }

    #[test]
    fn rejects_partial_codes() {
        assert!(lookup_lead("LEAD_II").is_none());
        assert!(lookup_lead("MDC_ECG_LEAD_II ").is_none());
        assert!(lookup_lead("").is_none());
    }
}
