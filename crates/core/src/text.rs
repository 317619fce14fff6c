/// The paragraph the highlighter operates on.
pub const FIXED_TEXT: &str = "Results-driven Senior Frontend Developer with over 5 years of experience building scalable, high-performance web applications and leading frontend teams. Proven expertise in React, Next.js, TypeScript, and state management libraries. Adept at delivering elegant, maintainable code, mentoring developers, and driving product excellence. Highly skilled in remote collaboration and cross-team communication, seeking to contribute to innovative projects in a fully remote environment";
