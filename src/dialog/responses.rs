//! Canonical reply catalog
//!
//! Every transition outcome maps to a fixed reply; the greeting alone is
//! drawn from a pool of variants so repeat visitors don't see the same
//! opener every time. Pool selection goes through the caller's RNG so tests
//! can pin exact text with a seeded generator.

use rand::Rng;

/// Greeting variants as (salutation, remainder). The split point is where an
/// optional display name is inserted.
const GREETINGS: [(&str, &str); 4] = [
    (
        "Hey",
        "! So you wanna hide some secrets? I gotchu. Just say 'encode' or 'decode' and we'll get started.",
    ),
    (
        "Yo",
        "! Welcome to the secret message zone. Need to hide something or dig out a hidden message?",
    ),
    (
        "Heyy",
        ", ready to do some sneaky stuff with images? Tell me if you wanna encode or decode!",
    ),
    (
        "What's up",
        "! I help people hide messages in plain sight. Pretty cool right? Just lmk what you need.",
    ),
];

/// Pick a greeting uniformly from the pool, re-rolled on every call.
pub(crate) fn greeting<R: Rng + ?Sized>(rng: &mut R, display_name: Option<&str>) -> String {
    let (salutation, rest) = GREETINGS[rng.gen_range(0..GREETINGS.len())];
    match display_name {
        Some(name) => format!("{salutation} {name}{rest}"),
        None => format!("{salutation}{rest}"),
    }
}

pub(crate) const HELP: &str = "Alright so here's the deal:\n\n\
**Encode** - I'll hide your secret message inside a normal-looking image. Nobody will know it's there (trust me).\n\n\
**Decode** - Got an image with hidden stuff? I'll pull it out for you.\n\n\
The tech nerd stuff: I use AES-256 encryption (same as banks lol) + steganography. Your message literally becomes invisible pixels.\n\n\
Just type \"encode\" or \"decode\" to start!";

pub(crate) const SECURITY: &str = "Ok so you're curious about the security stuff? Nice, I respect that.\n\n\
\u{1f510} **AES-256** - Bank-level encryption. Like, the real deal.\n\n\
\u{1f5bc}\u{fe0f} **LSB Steganography** - I hide data in the tiniest parts of pixels. Your eyes literally can't see the difference.\n\n\
\u{1f4c1} **Why PNG?** - JPG compresses stuff and would mess up the hidden data. PNG keeps everything intact.\n\n\
\u{1f511} **Your password** - It generates a unique key. No password = no access. Period.\n\n\
Basically even if someone intercepts your image, they just see... an image. The secret stays secret unless they have your password.";

pub(crate) const UNKNOWN: &str = "Hmm not sure what you mean there. Try 'encode' to hide a message, 'decode' to reveal one, or 'help' if you're lost!";

pub(crate) const CANCEL: &str = "No worries, cancelled! What else you wanna do?";

pub(crate) const ENCODE_START: &str = "Alright let's do this! First I need an image - just drop a PNG or JPG here (keep it under 5MB). This'll be your secret's new home.";

pub(crate) const ENCODE_GOT_IMAGE: &str = "Nice pic! Now what's the message you wanna hide in there?";

pub(crate) const ENCODE_GOT_MESSAGE: &str = "Got it! Now pick a password - make it something you'll remember cuz you'll need it to decode later. Don't lose it!";

pub(crate) const ENCODE_PROCESSING: &str = "Hang on a sec...\n\n\u{1f510} Encrypting your stuff...\n\u{1f5bc}\u{fe0f} Weaving it into the pixels...";

pub(crate) const ENCODE_SUCCESS: &str = "Done! Your message is now invisible. Download the image and send it wherever - only someone with your password can see what's hidden.";

pub(crate) const ENCODE_AWAITING_FILE: &str = "I'm waiting for an image. Please upload a PNG or JPG file.";

pub(crate) const ENCODE_EMPTY_MESSAGE: &str = "Please enter a message to hide.";

pub(crate) const PASSWORD_TOO_SHORT: &str = "Password must be at least 4 characters.";

pub(crate) const DECODE_START: &str = "Time to reveal some secrets! Drop the encoded image here. Heads up - PNG works best, JPG might've messed with the data.";

pub(crate) const DECODE_GOT_IMAGE: &str = "Got it! Now gimme the password that was used when encoding.";

pub(crate) const DECODE_PROCESSING: &str = "Let me dig through these pixels...\n\n\u{1f50d} Finding the hidden bits...\n\u{1f513} Decrypting...";

pub(crate) const DECODE_SUCCESS: &str = "Found it! Here's what was hiding in there:";

pub(crate) const DECODE_FAIL: &str = "Hmm couldn't get the message out. Could be:\n\u{2022} Wrong password (double check??)\n\u{2022} This image wasn't encoded by me\n\u{2022} Someone edited/compressed it after encoding\n\nWanna try again?";

pub(crate) const DECODE_RETRY_SUFFIX: &str = "\n\nTry again, or type 'cancel' to quit.";

pub(crate) const DECODE_AWAITING_FILE: &str = "I'm waiting for the encoded image. Please upload it.";
