//! Prompt assembly for verse explanations.
//!
//! The model is told the exact section order and headings, then given the verse
//! translation and the three commentaries as source data.

use crate::models::tafsir::{TafsirBundle, TafsirSource};
use crate::models::verse::VerseRef;

/// Build the explanation prompt for one verse
pub fn build_explanation_prompt(verse: VerseRef, ayah_text: &str, tafsir: &TafsirBundle) -> String {
    let VerseRef { surah, ayah } = verse;
    let mut prompt = format!(
        "You are a helpful and knowledgeable assistant for Quranic studies. \
         Your primary task is to provide a clear, multi-source explanation for Surah {surah}, Ayah {ayah}.\n\
         \n\
         **Your response MUST be structured in the following order:**\n\
         \n\
         **1. The Verse:**\n   \
         - Start with the heading \"### The Verse (Surah {surah}: Ayah {ayah})\".\n   \
         - Immediately after the heading, quote the English translation of the verse provided below.\n\
         \n\
         **2. The Explanation:**\n   \
         - Based on the data provided, generate a detailed explanation. You must attribute every piece of \
         information to its source using phrases like \"According to Al-Wahidi...\", \"Ibn Kathir explains that...\", etc.\n   \
         - If the 'Shan-e-Nazool' (reason for revelation) from Al-Wahidi is available, present it first under \
         the heading \"### Shan-e-Nazool (Reason for Revelation)\".\n   \
         - If it is unavailable, DO NOT mention the unavailability. Simply proceed to the next section.\n   \
         - Present the commentary from Tafsir Ibn Kathir under the heading \"### Classical Commentary: Tafsir Ibn Kathir\".\n   \
         - Present the commentary from Maarif-ul-Quran under the heading \"### Modern Commentary: Maarif-ul-Quran\".\n\
         \n\
         **3. Summary:**\n   \
         - Conclude with a brief summary under the heading \"### Summary\".\n\
         \n\
         ---\n\
         **DATA FOR YOUR TASK:**\n\
         \n\
         **[Verse Translation]:**\n\
         {ayah_text}\n"
    );

    for source in TafsirSource::ALL {
        prompt.push_str(&format!(
            "\n**[{}]:**\n{}\n",
            source.label(),
            tafsir.get(source)
        ));
    }

    prompt.push_str("---\n\nBegin your response now.\n");
    prompt
}
