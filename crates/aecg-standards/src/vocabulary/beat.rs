//! Beat vocabulary (`MDC_ECG_BEAT_*`).
//!
//! Class letters follow the MIT-BIH annotation symbols.

use std::sync::LazyLock;

use super::{BeatTerm, CodeIndex};

static BEAT_INDEX: LazyLock<CodeIndex> =
    LazyLock::new(|| CodeIndex::new(BEAT_TERMS.iter().map(|term| term.code)));

/// Resolve a beat code to its class letter and description.
pub fn lookup_beat(code: &str) -> Option<&'static BeatTerm> {
    BEAT_INDEX.position(code).map(|index| &BEAT_TERMS[index])
}

/// All beat terms in vocabulary order.
pub fn beat_terms() -> impl Iterator<Item = &'static BeatTerm> {
    BEAT_TERMS.iter()
}

const BEAT_TERMS: &[BeatTerm] = &[
    BeatTerm {
        code: "MDC_ECG_BEAT_NORMAL",
        class: 'N',
        description: "Normal beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_ABNORMAL",
        class: 'Q',
        description: "Abnormal beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_DOMINANT",
        class: 'N',
        description: "Dominant beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_UNKNOWN",
        class: 'Q',
        description: "Unclassifiable beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_SV_P_C",
        class: 'S',
        description: "Supraventricular premature contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_ATR_P_C",
        class: 'A',
        description: "Atrial premature contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_JUNC_P_C",
        class: 'J',
        description: "Junctional premature contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_ATR_P_C_ABERRANT",
        class: 'a',
        description: "Aberrated atrial premature contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_ATR_P_C_NONCONDUCTED",
        class: 'x',
        description: "Non-conducted atrial premature contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_SV_P_C_NONCONDUCTED",
        class: 'x',
        description: "Non-conducted supraventricular premature contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_SV_P_C_ABERRANT",
        class: 'a',
        description: "Aberrated supraventricular premature contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_SV_ESC",
        class: 'e',
        description: "Supraventricular escape beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_ATR_ESC",
        class: 'e',
        description: "Atrial escape beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_JUNC_ESC",
        class: 'j',
        description: "Junctional escape beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_B_BLOCK",
        class: 'B',
        description: "Bundle branch block beat (unspecified)",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_LBBB",
        class: 'L',
        description: "Left bundle branch block beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_RBBB",
        class: 'R',
        description: "Right bundle branch block beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_LBBB_INCOMPLETE",
        class: 'L',
        description: "Incomplete left bundle branch block beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_RBBB_INCOMPLETE",
        class: 'R',
        description: "Incomplete right bundle branch block beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_V_P_C",
        class: 'V',
        description: "Premature ventricular contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_V_P_C_MULTIFORM",
        class: 'V',
        description: "Multiform premature ventricular contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_V_P_C_UNIFORM",
        class: 'V',
        description: "Uniform premature ventricular contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_V_P_C_INTERPOLATED",
        class: 'V',
        description: "Interpolated premature ventricular contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_V_P_C_COUPLET",
        class: 'V',
        description: "Premature ventricular contraction in a couplet",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_R_ON_T",
        class: 'r',
        description: "R-on-T premature ventricular contraction",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_V_ESC",
        class: 'E',
        description: "Ventricular escape beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_FUSION_V_NORMAL",
        class: 'F',
        description: "Fusion of ventricular and normal beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_PACED",
        class: '/',
        description: "Paced beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_PACED_FUS",
        class: 'f',
        description: "Fusion of paced and normal beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_PACED_ATR",
        class: '/',
        description: "Atrially paced beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_PACED_VENT",
        class: '/',
        description: "Ventricularly paced beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_PACED_DUAL",
        class: '/',
        description: "Dual chamber paced beat",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_PACED_UNCAPTURED",
        class: 'Q',
        description: "Pacemaker spike without capture",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_V_FLUT_WAVE",
        class: '!',
        description: "Ventricular flutter wave",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_ARTIFACT",
        class: '|',
        description: "Isolated QRS-like artifact",
    },
    BeatTerm {
        code: "MDC_ECG_BEAT_NOISE",
        class: '~',
        description: "Noise or signal quality change",
    },
];
