//! Built-in seed corpus.
//!
//! Used when no external corpus is available so the knowledge base is always
//! queryable without configuration.

use super::models::SourceDocument;

/// The fixed set of seed topic documents
#[inline]
pub fn seed_documents() -> Vec<SourceDocument> {
    vec![
        SourceDocument::new(
            "Derivatives",
            "A derivative measures how a function changes as its input changes. \
             The derivative of a function at a point is the slope of the tangent line at that point. \
             Derivatives are defined using limits of difference quotients. \
             Common rules include the power rule, the product rule, the quotient rule and the chain rule. \
             In physics, the derivative of position with respect to time is velocity.",
            "math",
            &["calculus", "derivative", "limits"],
        ),
        SourceDocument::new(
            "Türev ve İntegral",
            "Türev bir fonksiyonun değişim hızını ölçer. \
             Bir noktadaki türev, o noktadaki teğet doğrusunun eğimidir. \
             İntegral ise eğri altında kalan alanı hesaplamak için kullanılır. \
             Analizin temel teoremi türev ile integral arasındaki bağlantıyı kurar.",
            "math",
            &["analiz", "türev", "integral"],
        ),
        SourceDocument::new(
            "Newton's Laws of Motion",
            "Newton's first law states that an object remains at rest or in uniform motion unless acted upon by a net force. \
             The second law states that force equals mass times acceleration. \
             The third law states that every action has an equal and opposite reaction. \
             These laws form the foundation of classical mechanics.",
            "physics",
            &["mechanics", "force", "motion"],
        ),
        SourceDocument::new(
            "Variables and Data Types",
            "Variables store values that a program can read and modify. \
             Every value has a data type such as integer, floating point, boolean or string. \
             Statically typed languages check types at compile time, while dynamically typed languages check them at runtime. \
             Choosing the right data type keeps programs correct and efficient.",
            "programming",
            &["variables", "types", "basics"],
        ),
        SourceDocument::new(
            "Loops and Iteration",
            "Loops repeat a block of code while a condition holds. \
             A for loop iterates over a range or a collection, and a while loop runs until its condition becomes false. \
             Iteration is used to process lists, search data and accumulate results. \
             Infinite loops occur when the exit condition is never reached.",
            "programming",
            &["loops", "iteration", "control-flow"],
        ),
        SourceDocument::new(
            "Chemical Bonds",
            "Atoms form chemical bonds to reach a stable electron configuration. \
             Ionic bonds transfer electrons between atoms, while covalent bonds share electron pairs. \
             Metallic bonds hold metal atoms together in a sea of delocalized electrons. \
             Bond type determines properties such as melting point and conductivity.",
            "chemistry",
            &["atoms", "bonds", "electrons"],
        ),
        SourceDocument::new(
            "Photosynthesis",
            "Photosynthesis converts light energy into chemical energy stored in glucose. \
             Plants, algae and some bacteria perform photosynthesis in their chloroplasts. \
             The process uses carbon dioxide and water and releases oxygen. \
             Chlorophyll absorbs mostly blue and red light.",
            "biology",
            &["plants", "energy", "cells"],
        ),
    ]
}
