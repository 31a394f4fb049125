/*!
 * Revised Romanization of Korean.
 *
 * Hangul syllables are decomposed into initial, medial and final jamo and
 * rendered with the sound changes that happen across syllable boundaries
 * (linking into a silent ㅇ, nasalization, liquidization and aspiration).
 */

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

const INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t", "p", "h",
];

const MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo", "we", "wi", "yu",
    "eu", "ui", "i",
];

/// Final consonants before a pause or another consonant
const FINALS: [&str; 28] = [
    "", "k", "k", "k", "n", "n", "n", "t", "l", "k", "m", "l", "l", "l", "p", "l", "m", "p", "p", "t", "t",
    "ng", "t", "t", "k", "t", "p", "t",
];

/// Final consonants carried over into a following silent ㅇ
const LINKED_FINALS: [&str; 28] = [
    "", "g", "kk", "gs", "n", "nj", "n", "d", "r", "lg", "lm", "lb", "ls", "lt", "lp", "r", "m", "b", "bs",
    "s", "ss", "ng", "j", "ch", "k", "t", "p", "",
];

// Initial jamo indices
const INITIAL_G: usize = 0;
const INITIAL_N: usize = 2;
const INITIAL_D: usize = 3;
const INITIAL_R: usize = 5;
const INITIAL_M: usize = 6;
const INITIAL_SILENT: usize = 11;
const INITIAL_J: usize = 12;
const INITIAL_H: usize = 18;

// Final jamo indices
const FINAL_NONE: usize = 0;
const FINAL_N: usize = 4;
const FINAL_NH: usize = 6;
const FINAL_L: usize = 8;
const FINAL_LH: usize = 15;
const FINAL_NG: usize = 21;
const FINAL_H: usize = 27;

/// Decomposed Hangul syllable
#[derive(Debug, Clone, Copy)]
struct Syllable {
    initial: usize,
    medial: usize,
    final_: usize,
}

impl Syllable {
    fn decompose(c: char) -> Option<Self> {
        let code = c as u32;
        if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
            return None;
        }
        let index = code - SYLLABLE_BASE;
        Some(Self {
            initial: (index / (MEDIAL_COUNT * FINAL_COUNT)) as usize,
            medial: ((index % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT) as usize,
            final_: (index % FINAL_COUNT) as usize,
        })
    }
}

/// Sound class of a final consonant as pronounced before a consonant
#[derive(Debug, Clone, Copy, PartialEq)]
enum FinalClass {
    K,
    T,
    P,
    Other,
}

fn final_class(final_: usize) -> FinalClass {
    match FINALS[final_] {
        "k" => FinalClass::K,
        "t" => FinalClass::T,
        "p" => FinalClass::P,
        _ => FinalClass::Other,
    }
}

/// Romanize Korean text. Characters outside the Hangul syllable block pass
/// through unchanged.
pub fn romanize(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() * 3);

    // Initial of the current syllable, possibly rewritten by the previous final
    let mut pending_initial: Option<&'static str> = None;

    for (i, &c) in chars.iter().enumerate() {
        let Some(syllable) = Syllable::decompose(c) else {
            result.push(c);
            pending_initial = None;
            continue;
        };

        result.push_str(pending_initial.take().unwrap_or(INITIALS[syllable.initial]));
        result.push_str(MEDIALS[syllable.medial]);

        let next = chars.get(i + 1).copied().and_then(Syllable::decompose);
        let (coda, next_initial) = match next {
            Some(next) => boundary(syllable.final_, next.initial),
            None => (FINALS[syllable.final_], None),
        };
        result.push_str(coda);
        pending_initial = next_initial;
    }

    result
}

/// Pronunciation of `final_` followed by `initial`: the coda to emit and an
/// optional replacement for the next syllable's initial.
fn boundary(final_: usize, initial: usize) -> (&'static str, Option<&'static str>) {
    if final_ == FINAL_NONE {
        return ("", None);
    }

    // Linking into a silent initial
    if initial == INITIAL_SILENT {
        return ("", Some(LINKED_FINALS[final_]));
    }

    let class = final_class(final_);

    // Aspiration: ㄱ/ㄷ/ㅂ + ㅎ and ㅎ + ㄱ/ㄷ/ㅈ
    if initial == INITIAL_H {
        match class {
            FinalClass::K => return ("", Some("k")),
            FinalClass::T => return ("", Some("t")),
            FinalClass::P => return ("", Some("p")),
            FinalClass::Other => {}
        }
    }
    if matches!(final_, FINAL_H | FINAL_NH | FINAL_LH) {
        let aspirated = match initial {
            INITIAL_G => Some("k"),
            INITIAL_D => Some("t"),
            INITIAL_J => Some("ch"),
            _ => None,
        };
        if let Some(aspirated) = aspirated {
            let coda = match final_ {
                FINAL_NH => "n",
                FINAL_LH => "l",
                _ => "",
            };
            return (coda, Some(aspirated));
        }
    }

    // Nasalization before ㄴ/ㅁ
    if initial == INITIAL_N || initial == INITIAL_M {
        match class {
            FinalClass::K => return ("ng", None),
            FinalClass::T => return ("n", None),
            FinalClass::P => return ("m", None),
            FinalClass::Other => {}
        }
    }

    // Liquidization and ㄹ after other consonants
    if initial == INITIAL_R {
        if final_ == FINAL_L || final_ == FINAL_N {
            return ("l", Some("l"));
        }
        return match class {
            FinalClass::K => ("ng", Some("n")),
            FinalClass::P => ("m", Some("n")),
            FinalClass::T => ("n", Some("n")),
            FinalClass::Other => (FINALS[final_], Some("n")),
        };
    }
    if final_ == FINAL_L && initial == INITIAL_N {
        return ("l", Some("l"));
    }

    // A final ㅎ before other consonants is not pronounced
    if final_ == FINAL_H {
        return ("", None);
    }

    (FINALS[final_], None)
}
