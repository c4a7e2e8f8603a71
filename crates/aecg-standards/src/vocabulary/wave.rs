//! Wave vocabulary (`MDC_ECG_WAVC_*`).
//!
//! Consumed by annotation decoding; the signal decoder itself does not use it.

use std::sync::LazyLock;

use super::{CodeIndex, Term};

static WAVE_INDEX: LazyLock<CodeIndex> =
    LazyLock::new(|| CodeIndex::new(WAVE_TERMS.iter().map(|term| term.code)));

/// Resolve a wave code to its label and description.
pub fn lookup_wave(code: &str) -> Option<&'static Term> {
    WAVE_INDEX.position(code).map(|index| &WAVE_TERMS[index])
}

/// All wave terms in vocabulary order.
pub fn wave_terms() -> impl Iterator<Item = &'static Term> {
    WAVE_TERMS.iter()
}

const WAVE_TERMS: &[Term] = &[
    Term {
        code: "MDC_ECG_WAVC_PWAVE",
        label: "P",
        description: "P wave",
    },
    Term {
        code: "MDC_ECG_WAVC_PPWAVE",
        label: "P'",
        description: "P' wave (second deflection in P wave)",
    },
    Term {
        code: "MDC_ECG_WAVC_PPPWAVE",
        label: "P''",
        description: "P'' wave (third deflection in P wave)",
    },
    Term {
        code: "MDC_ECG_WAVC_QRSWAVE",
        label: "QRS",
        description: "QRS complex",
    },
    Term {
        code: "MDC_ECG_WAVC_QWAVE",
        label: "Q",
        description: "Q wave",
    },
    Term {
        code: "MDC_ECG_WAVC_RWAVE",
        label: "R",
        description: "R wave",
    },
    Term {
        code: "MDC_ECG_WAVC_RRWAVE",
        label: "R'",
        description: "R' wave (second positive deflection)",
    },
    Term {
        code: "MDC_ECG_WAVC_RRRWAVE",
        label: "R''",
        description: "R'' wave (third positive deflection)",
    },
    Term {
        code: "MDC_ECG_WAVC_NOTCH",
        label: "Notch",
        description: "Notch in the QRS complex",
    },
    Term {
        code: "MDC_ECG_WAVC_SWAVE",
        label: "S",
        description: "S wave",
    },
    Term {
        code: "MDC_ECG_WAVC_SSWAVE",
        label: "S'",
        description: "S' wave (second negative deflection)",
    },
    Term {
        code: "MDC_ECG_WAVC_SSSWAVE",
        label: "S''",
        description: "S'' wave (third negative deflection)",
    },
    Term {
        code: "MDC_ECG_WAVC_TWAVE",
        label: "T",
        description: "T wave",
    },
    Term {
        code: "MDC_ECG_WAVC_TTWAVE",
        label: "T'",
        description: "T' wave (second deflection in T wave)",
    },
    Term {
        code: "MDC_ECG_WAVC_UWAVE",
        label: "U",
        description: "U wave",
    },
    Term {
        code: "MDC_ECG_WAVC_PQRSTWAVE",
        label: "PQRST",
        description: "Entire beat from P onset to T offset",
    },
    Term {
        code: "MDC_ECG_WAVC_QSWAVE",
        label: "QS",
        description: "QS wave (single negative QRS deflection)",
    },
    Term {
        code: "MDC_ECG_WAVC_DELTA",
        label: "Delta",
        description: "Delta wave (pre-excitation)",
    },
    Term {
        code: "MDC_ECG_WAVC_IWAVE",
        label: "I",
        description: "Isoelectric region between global QRS onset and lead QRS onset",
    },
    Term {
        code: "MDC_ECG_WAVC_KWAVE",
        label: "K",
        description: "Isoelectric region between lead QRS offset and global QRS offset",
    },
    Term {
        code: "MDC_ECG_WAVC_JWAVE",
        label: "J",
        description: "Osborn (J) wave",
    },
    Term {
        code: "MDC_ECG_WAVC_PRSEG",
        label: "PR",
        description: "PR segment",
    },
    Term {
        code: "MDC_ECG_WAVC_STSEG",
        label: "ST",
        description: "ST segment",
    },
    Term {
        code: "MDC_ECG_WAVC_STJ",
        label: "J point",
        description: "ST junction (J point)",
    },
    Term {
        code: "MDC_ECG_WAVC_STCHANGE",
        label: "ST change",
        description: "ST segment change",
    },
    Term {
        code: "MDC_ECG_WAVC_TPSEG",
        label: "TP",
        description: "TP segment",
    },
    Term {
        code: "MDC_ECG_WAVC_PACESP",
        label: "Pace",
        description: "Pacemaker spike",
    },
    Term {
        code: "MDC_ECG_WAVC_ATRPACESP",
        label: "A-pace",
        description: "Atrial pacemaker spike",
    },
    Term {
        code: "MDC_ECG_WAVC_VENTPACESP",
        label: "V-pace",
        description: "Ventricular pacemaker spike",
    },
    Term {
        code: "MDC_ECG_WAVC_FLWAVE",
        label: "F",
        description: "Flutter wave",
    },
    Term {
        code: "MDC_ECG_WAVC_FBWAVE",
        label: "f",
        description: "Fibrillation wave",
    },
    Term {
        code: "MDC_ECG_WAVC_ARFCT",
        label: "Artifact",
        description: "Artifact",
    },
    Term {
        code: "MDC_ECG_WAVC_NOISE",
        label: "Noise",
        description: "Noise",
    },
];
