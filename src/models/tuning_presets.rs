//! Built-in tuning tables
//!
//! Open-string pitches are listed top to bottom as drawn on a horizontal
//! fretboard, which for most presets means lowest string first.

use super::pitch::PitchClass::*;
use super::tuning::{Instrument, TuningPreset};

pub static TUNING_PRESETS: &[TuningPreset] = &[
    // Guitar
    TuningPreset {
        id: "guitar.standard",
        name: "Standard",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (A, 2), (D, 3), (G, 3), (B, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.dropD",
        name: "Drop D",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (A, 2), (D, 3), (G, 3), (B, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.halfStepDown",
        name: "Half Step Down",
        instrument: Instrument::Guitar,
        strings: &[(Eb, 2), (Ab, 2), (Db, 3), (Gb, 3), (Bb, 3), (Eb, 4)],
    },
    TuningPreset {
        id: "guitar.fullStepDown",
        name: "Full Step Down",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (C, 3), (F, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.oneAndHalfStepDown",
        name: "One and Half Step Down",
        instrument: Instrument::Guitar,
        strings: &[(Db, 2), (Gb, 2), (B, 2), (E, 3), (Ab, 3), (Db, 4)],
    },
    TuningPreset {
        id: "guitar.doubleDropD",
        name: "Double Drop D",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (A, 2), (D, 3), (G, 3), (B, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.dropC",
        name: "Drop C",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (C, 3), (F, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.dropDFlat",
        name: "Drop D♭",
        instrument: Instrument::Guitar,
        strings: &[(Db, 2), (Ab, 2), (Db, 3), (Gb, 3), (Bb, 3), (Eb, 4)],
    },
    TuningPreset {
        id: "guitar.dropB",
        name: "Drop B",
        instrument: Instrument::Guitar,
        strings: &[(B, 1), (Gb, 2), (B, 2), (E, 3), (Ab, 3), (Db, 4)],
    },
    TuningPreset {
        id: "guitar.dropBFlat",
        name: "Drop B♭",
        instrument: Instrument::Guitar,
        strings: &[(Bb, 1), (F, 2), (Bb, 2), (Eb, 3), (G, 3), (C, 4)],
    },
    TuningPreset {
        id: "guitar.dropA",
        name: "Drop A",
        instrument: Instrument::Guitar,
        strings: &[(A, 1), (E, 2), (A, 2), (D, 3), (Gb, 3), (B, 3)],
    },
    TuningPreset {
        id: "guitar.openD",
        name: "Open D",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (A, 2), (D, 3), (Gb, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.openDMinor",
        name: "Open D Minor",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (A, 2), (D, 3), (F, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.openG",
        name: "Open G",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (D, 3), (G, 3), (B, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.openGMinor",
        name: "Open G Minor",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (D, 3), (G, 3), (Bb, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.openC",
        name: "Open C",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (C, 3), (G, 3), (C, 4), (E, 4)],
    },
    TuningPreset {
        id: "guitar.openDFlat",
        name: "Open D♭",
        instrument: Instrument::Guitar,
        strings: &[(Db, 2), (Gb, 2), (B, 3), (E, 3), (Ab, 3), (Db, 4)],
    },
    TuningPreset {
        id: "guitar.openCMinor",
        name: "Open C Minor",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (C, 3), (G, 3), (C, 4), (Eb, 4)],
    },
    TuningPreset {
        id: "guitar.openE7",
        name: "Open E7",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (Ab, 2), (D, 3), (E, 3), (B, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.openEMinor7",
        name: "Open EMinor7",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (B, 2), (D, 3), (G, 3), (B, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.openGMajor7",
        name: "Open GMajor7",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (D, 3), (Gb, 3), (B, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.openAMinor",
        name: "Open A Minor",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (A, 2), (E, 3), (A, 3), (C, 4), (E, 4)],
    },
    TuningPreset {
        id: "guitar.openAMinor7",
        name: "Open AMinor7",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (A, 2), (E, 3), (G, 3), (C, 4), (E, 4)],
    },
    TuningPreset {
        id: "guitar.openE",
        name: "Open E",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (B, 2), (E, 3), (Ab, 3), (B, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.openA",
        name: "Open A",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (A, 2), (Db, 3), (E, 3), (A, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.c",
        name: "C",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (F, 2), (Bb, 2), (Eb, 3), (G, 3), (C, 4)],
    },
    TuningPreset {
        id: "guitar.dFlat",
        name: "D♭",
        instrument: Instrument::Guitar,
        strings: &[(Db, 2), (Gb, 2), (B, 2), (E, 3), (Ab, 3), (Db, 4)],
    },
    TuningPreset {
        id: "guitar.bFlat",
        name: "B♭",
        instrument: Instrument::Guitar,
        strings: &[(Bb, 1), (Eb, 2), (Ab, 2), (Db, 3), (F, 3), (Bb, 3)],
    },
    TuningPreset {
        id: "guitar.baritone",
        name: "Baritone",
        instrument: Instrument::Guitar,
        strings: &[(A, 1), (D, 2), (G, 2), (C, 3), (E, 3), (A, 3)],
    },
    TuningPreset {
        id: "guitar.dadddd",
        name: "DADDDD",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (A, 2), (D, 3), (D, 3), (D, 4), (D, 4)],
    },
    TuningPreset {
        id: "guitar.cgdgbd",
        name: "CGDGBD",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (D, 3), (G, 3), (B, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.cgdgbe",
        name: "CGDGBE",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (D, 3), (G, 3), (B, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.dadead",
        name: "DADEAD",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (A, 2), (D, 3), (E, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.dgdgad",
        name: "DGDGAD",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (D, 3), (G, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.openDSus2",
        name: "Open DSus2",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (A, 2), (D, 3), (G, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.openGSus2",
        name: "Open GSus2",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (D, 3), (G, 3), (C, 4), (D, 4)],
    },
    TuningPreset {
        id: "guitar.g6",
        name: "G6",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (D, 3), (G, 3), (B, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.modalG",
        name: "Modal G",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (D, 3), (G, 3), (C, 4), (D, 4)],
    },
    TuningPreset {
        id: "guitar.overtone",
        name: "Overtone",
        instrument: Instrument::Guitar,
        strings: &[(C, 3), (E, 3), (G, 3), (Bb, 3), (C, 4), (D, 4)],
    },
    TuningPreset {
        id: "guitar.pentatonic",
        name: "Pentatonic",
        instrument: Instrument::Guitar,
        strings: &[(A, 2), (C, 3), (D, 3), (E, 3), (G, 3), (A, 4)],
    },
    TuningPreset {
        id: "guitar.minorThriad",
        name: "Minor Thriad",
        instrument: Instrument::Guitar,
        strings: &[(C, 3), (Eb, 3), (Gb, 3), (A, 3), (C, 4), (Eb, 4)],
    },
    TuningPreset {
        id: "guitar.majorThriad",
        name: "Major Thriad",
        instrument: Instrument::Guitar,
        strings: &[(C, 3), (E, 3), (Ab, 3), (C, 4), (E, 4), (Ab, 4)],
    },
    TuningPreset {
        id: "guitar.allFourths",
        name: "All Fourths",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (A, 2), (D, 3), (G, 3), (C, 4), (F, 4)],
    },
    TuningPreset {
        id: "guitar.agumentedFourths",
        name: "Agumented Fourts",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (Gb, 2), (C, 3), (Gb, 3), (C, 4), (Gb, 4)],
    },
    TuningPreset {
        id: "guitar.slowMotion",
        name: "Slow Motion",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (G, 2), (D, 3), (F, 3), (C, 4), (D, 4)],
    },
    TuningPreset {
        id: "guitar.admiral",
        name: "Admiral",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (D, 3), (G, 3), (B, 3), (C, 4)],
    },
    TuningPreset {
        id: "guitar.buzzard",
        name: "Buzzard",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (F, 2), (C, 3), (G, 3), (Bb, 3), (F, 4)],
    },
    TuningPreset {
        id: "guitar.face",
        name: "Face",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (D, 3), (G, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.fourAndTwenty",
        name: "Four and Twenty",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (A, 2), (D, 3), (D, 3), (A, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.ostrich",
        name: "Ostrich",
        instrument: Instrument::Guitar,
        strings: &[(D, 2), (D, 3), (D, 3), (D, 3), (D, 4), (D, 4)],
    },
    TuningPreset {
        id: "guitar.capo200",
        name: "Capo 200",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (D, 3), (Eb, 3), (D, 4), (Eb, 4)],
    },
    TuningPreset {
        id: "guitar.balalaika",
        name: "Balalaika",
        instrument: Instrument::Guitar,
        strings: &[(E, 2), (A, 2), (D, 3), (E, 3), (E, 3), (A, 3)],
    },
    TuningPreset {
        id: "guitar.charango",
        name: "Charango",
        instrument: Instrument::Guitar,
        strings: &[(G, 2), (C, 3), (E, 3), (A, 3), (E, 4)],
    },
    TuningPreset {
        id: "guitar.citternOne",
        name: "Cittern One",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (F, 2), (C, 3), (G, 3), (C, 4), (D, 4)],
    },
    TuningPreset {
        id: "guitar.citternTwo",
        name: "Cittern Two",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (C, 3), (G, 3), (C, 4), (G, 4)],
    },
    TuningPreset {
        id: "guitar.dobro",
        name: "Dobro",
        instrument: Instrument::Guitar,
        strings: &[(G, 2), (B, 2), (D, 3), (G, 3), (B, 3), (D, 4)],
    },
    TuningPreset {
        id: "guitar.leftty",
        name: "Lefty",
        instrument: Instrument::Guitar,
        strings: &[(E, 4), (B, 3), (G, 3), (D, 3), (A, 2), (E, 2)],
    },
    TuningPreset {
        id: "guitar.mandoguitar",
        name: "Mandoguitar",
        instrument: Instrument::Guitar,
        strings: &[(C, 2), (G, 2), (D, 3), (A, 3), (E, 4), (B, 4)],
    },
    TuningPreset {
        id: "guitar.rustyCage",
        name: "Rusty Cage",
        instrument: Instrument::Guitar,
        strings: &[(B, 1), (A, 2), (D, 3), (G, 3), (B, 3), (E, 4)],
    },
    // Bass
    TuningPreset {
        id: "bass.standard4String",
        name: "4 String Standard",
        instrument: Instrument::Bass,
        strings: &[(E, 1), (A, 1), (D, 2), (G, 2)],
    },
    TuningPreset {
        id: "bass.standard5String",
        name: "5 String Standard",
        instrument: Instrument::Bass,
        strings: &[(B, 0), (E, 1), (A, 1), (D, 2), (G, 2)],
    },
    TuningPreset {
        id: "bass.standard6String",
        name: "6 String Standard",
        instrument: Instrument::Bass,
        strings: &[(B, 0), (E, 1), (A, 1), (D, 2), (G, 2), (C, 3)],
    },
    TuningPreset {
        id: "bass.standard7String",
        name: "7 String standard",
        instrument: Instrument::Bass,
        strings: &[(B, 0), (E, 1), (A, 1), (D, 2), (G, 2), (D, 3), (C, 3)],
    },
    TuningPreset {
        id: "bass.standard8String",
        name: "8 String Standard",
        instrument: Instrument::Bass,
        strings: &[(Gb, 0), (B, 0), (E, 1), (A, 1), (D, 2), (G, 2), (C, 3), (F, 3)],
    },
    TuningPreset {
        id: "bass.dropD4String",
        name: "4 String Drop D",
        instrument: Instrument::Bass,
        strings: &[(D, 1), (A, 1), (D, 2), (G, 2)],
    },
    TuningPreset {
        id: "bass.dropB4String",
        name: "4 String Drop B",
        instrument: Instrument::Bass,
        strings: &[(D, 1), (A, 1), (D, 2), (G, 2)],
    },
    TuningPreset {
        id: "bass.openA4String",
        name: "4 String Open A",
        instrument: Instrument::Bass,
        strings: &[(E, 1), (A, 1), (E, 2), (A, 2)],
    },
    TuningPreset {
        id: "bass.openE4String",
        name: "4 String Open E",
        instrument: Instrument::Bass,
        strings: &[(E, 1), (B, 1), (E, 2), (Ab, 2)],
    },
    TuningPreset {
        id: "bass.e7sus44string",
        name: "4 String E7sus4",
        instrument: Instrument::Bass,
        strings: &[(B, 1), (E, 1), (A, 2), (D, 2)],
    },
    TuningPreset {
        id: "bass.gsus44String",
        name: "4 String Gsus4",
        instrument: Instrument::Bass,
        strings: &[(D, 1), (A, 1), (D, 2), (G, 2)],
    },
    TuningPreset {
        id: "bass.tenor4String",
        name: "4 String Tenor",
        instrument: Instrument::Bass,
        strings: &[(A, 1), (D, 1), (G, 2), (C, 2)],
    },
    TuningPreset {
        id: "bass.piccolo4String",
        name: "4 String Piccolo",
        instrument: Instrument::Bass,
        strings: &[(E, 2), (A, 2), (D, 3), (G, 3)],
    },
    TuningPreset {
        id: "bass.halfStepDown4String",
        name: "4 String Half Step Down",
        instrument: Instrument::Bass,
        strings: &[(Eb, 1), (Ab, 1), (Db, 2), (Gb, 2)],
    },
    TuningPreset {
        id: "bass.halfStepDown5String",
        name: "5 String Half Step Down",
        instrument: Instrument::Bass,
        strings: &[(Bb, 0), (Eb, 1), (Ab, 1), (Db, 2), (Gb, 2)],
    },
    TuningPreset {
        id: "bass.halfStepDown6String",
        name: "6 String Half Step Down",
        instrument: Instrument::Bass,
        strings: &[(Bb, 0), (Eb, 1), (Ab, 1), (Db, 2), (Gb, 2), (B, 3)],
    },
    TuningPreset {
        id: "bass.fullStepDown4String",
        name: "4 String Full Step Down",
        instrument: Instrument::Bass,
        strings: &[(D, 1), (G, 1), (C, 2), (F, 2)],
    },
    TuningPreset {
        id: "bass.fullStepDown5String",
        name: "5 String Full Step Down",
        instrument: Instrument::Bass,
        strings: &[(A, 0), (D, 1), (G, 1), (C, 2), (F, 2)],
    },
    TuningPreset {
        id: "bass.eadgcf6String",
        name: "6 String EADGCF",
        instrument: Instrument::Bass,
        strings: &[(E, 0), (A, 1), (D, 1), (G, 2), (C, 2), (F, 3)],
    },
    TuningPreset {
        id: "bass.fbeadg6String",
        name: "6 String F#BEADG",
        instrument: Instrument::Bass,
        strings: &[(Gb, 0), (B, 1), (E, 1), (A, 2), (D, 2), (G, 3)],
    },
    TuningPreset {
        id: "bass.fbeadgc7String",
        name: "7 String F#BEADGC",
        instrument: Instrument::Bass,
        strings: &[(Gb, 0), (B, 1), (E, 1), (A, 2), (D, 2), (G, 3), (C, 3)],
    },
    // Ukulele
    TuningPreset {
        id: "ukulele.standard",
        name: "Standard",
        instrument: Instrument::Ukulele,
        strings: &[(G, 4), (C, 4), (E, 4), (A, 4)],
    },
    TuningPreset {
        id: "ukulele.soprano",
        name: "Soprano",
        instrument: Instrument::Ukulele,
        strings: &[(A, 4), (D, 4), (Gb, 4), (B, 4)],
    },
    TuningPreset {
        id: "ukulele.baritone",
        name: "Baritone",
        instrument: Instrument::Ukulele,
        strings: &[(D, 3), (G, 3), (B, 3), (E, 4)],
    },
    TuningPreset {
        id: "ukulele.tenor",
        name: "Tenor",
        instrument: Instrument::Ukulele,
        strings: &[(G, 3), (C, 4), (E, 4), (A, 4)],
    },
];
