//! Tool definitions advertised to the model for function calling.

use serde_json::{Value, json};

/// All tool definition blocks, OpenAI function-calling format. The set is
/// fixed at process start.
pub fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "type": "function",
            "function": {
                "name": "cod_analysis",
                "description": "Perform systematic Chain of Deliberation analysis on complex problems",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "problem": {
                            "type": "string",
                            "description": "The problem or question to analyze"
                        },
                        "complexity_level": {
                            "type": "string",
                            "enum": ["basic", "standard", "advanced", "research"],
                            "description": "Complexity level for analysis"
                        },
                        "word_limit": {
                            "type": "integer",
                            "minimum": 50,
                            "maximum": 300,
                            "description": "Word limit for each CoD step"
                        }
                    },
                    "required": ["problem", "complexity_level", "word_limit"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "memory_store",
                "description": "Store important information in the categorized memory system",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "enum": ["personal", "projects", "technical", "reflections"],
                            "description": "Memory category"
                        },
                        "content": {
                            "type": "string",
                            "description": "Content to store"
                        },
                        "context": {
                            "type": "string",
                            "description": "Context or tags for the memory"
                        }
                    },
                    "required": ["category", "content", "context"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "verification_analysis",
                "description": "Perform deep verification of reasoning and solutions",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "solution": {
                            "type": "string",
                            "description": "The solution or reasoning to verify"
                        },
                        "verification_depth": {
                            "type": "string",
                            "enum": ["basic", "standard", "deep", "research"],
                            "description": "Depth of verification"
                        }
                    },
                    "required": ["solution", "verification_depth"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "enhanced_research",
                "description": "Conduct comprehensive research analysis across focus areas",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "topic": {
                            "type": "string",
                            "description": "Research topic or query"
                        },
                        "focus_areas": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "Specific areas to focus on"
                        },
                        "depth": {
                            "type": "string",
                            "enum": ["overview", "detailed", "comprehensive"],
                            "description": "Research depth level"
                        }
                    },
                    "required": ["topic", "focus_areas", "depth"]
                }
            }
        }),
        json!({
            "type": "function",
            "function": {
                "name": "web_search",
                "description": "Search the web for current, real-time information. Use for recent events, news, or any topic requiring up-to-date data. Returns formatted results with sources.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Search query or topic to research"
                        },
                        "search_depth": {
                            "type": "string",
                            "enum": ["basic", "advanced"],
                            "default": "basic",
                            "description": "basic for quick results, advanced for comprehensive"
                        },
                        "max_results": {
                            "type": "integer",
                            "minimum": 1,
                            "maximum": 10,
                            "default": 5,
                            "description": "Maximum number of search results to return"
                        },
                        "include_domains": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "Specific domains to include in search"
                        },
                        "exclude_domains": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "Specific domains to exclude from search"
                        }
                    },
                    "required": ["query"]
                }
            }
        }),
    ]
}
