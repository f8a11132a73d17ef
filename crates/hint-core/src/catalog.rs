//! Built-in Catalog
//!
//! Seed hints for the exercise series, from model basics through RAG
//! evaluation. Hint order matters: each list runs from most general to most
//! specific.

use crate::model::HintRecord;

/// Static seed row
struct CatalogEntry {
    topic_id: &'static str,
    category: &'static str,
    hints: &'static [&'static str],
    summary: &'static str,
}

const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        topic_id: "initialize_model",
        category: "01_model_basics",
        hints: &[
            "Look for init_chat_model() in langchain module",
            "The model_name format is 'provider/model' like 'openai/gpt-4-turbo'",
            "Check that you're importing from the right module: from langchain import init_chat_model",
            "The function should simply call init_chat_model(model_name) and return the result",
        ],
        summary: "Use init_chat_model() from langchain package with the model_name parameter",
    },
    CatalogEntry {
        topic_id: "invoke_model",
        category: "01_model_basics",
        hints: &[
            "The model object has an .invoke() method",
            "invoke() takes a string prompt and returns a response object",
            "The response has a .content attribute with the text",
            "Return response.content to get just the string",
        ],
        summary: "Call model.invoke(prompt) and return response.content",
    },
    CatalogEntry {
        topic_id: "stream_model",
        category: "01_model_basics",
        hints: &[
            "Use model.stream() instead of model.invoke()",
            "stream() returns an iterator that yields chunks",
            "Each chunk has a .content attribute",
            "Use 'yield chunk.content' in a for loop",
        ],
        summary: "for chunk in model.stream(prompt): yield chunk.content",
    },
    CatalogEntry {
        topic_id: "batch_model",
        category: "01_model_basics",
        hints: &[
            "Use model.batch() with a list of prompts",
            "batch() returns a list of response objects",
            "Extract .content from each response",
            "Use list comprehension: [r.content for r in responses]",
        ],
        summary: "Call model.batch(prompts) and extract .content from each response",
    },
    CatalogEntry {
        topic_id: "create_system_message",
        category: "02_messages",
        hints: &[
            "Import SystemMessage from langchain_core.messages",
            "SystemMessage takes content as argument",
            "Return SystemMessage(content)",
        ],
        summary: "from langchain_core.messages import SystemMessage; return SystemMessage(content)",
    },
    CatalogEntry {
        topic_id: "build_conversation",
        category: "02_messages",
        hints: &[
            "A conversation is just a list of messages",
            "Start with SystemMessage for system prompt",
            "Alternate HumanMessage and AIMessage",
            "Return the list of message objects",
        ],
        summary: "Build a list starting with SystemMessage, then alternating Human/AI messages",
    },
    CatalogEntry {
        topic_id: "create_calculator_tool",
        category: "03_tool_definition",
        hints: &[
            "Import the @tool decorator from langchain_core.tools",
            "Define a function with proper type hints",
            "Write a clear docstring - this becomes the tool description",
            "The decorator auto-generates the schema from your function",
        ],
        summary: "@tool decorator + function with type hints + docstring",
    },
    CatalogEntry {
        topic_id: "create_basic_agent",
        category: "04_basic_agents",
        hints: &[
            "Look for create_agent() in langchain",
            "You need to pass both model and tools",
            "The agent wraps the model with tool-use capability",
            "Return the created agent object",
        ],
        summary: "Use create_agent(model, tools) from langchain",
    },
    CatalogEntry {
        topic_id: "load_pdf_document",
        category: "13_document_loading",
        hints: &[
            "You can use PyPDF2, pdfplumber, or langchain document loaders",
            "Each page should become a separate Document",
            "Store page number and source in metadata",
            "Handle encoding issues with proper error handling",
        ],
        summary: "Use a PDF library to extract text page by page, create Document objects",
    },
    CatalogEntry {
        topic_id: "load_web_page",
        category: "13_document_loading",
        hints: &[
            "Use requests to fetch HTML content",
            "Use BeautifulSoup to parse and clean HTML",
            "Extract main content, remove nav/footer/ads",
            "Store URL and title in metadata",
        ],
        summary: "requests.get() + BeautifulSoup for parsing + clean text extraction",
    },
    CatalogEntry {
        topic_id: "create_embeddings",
        category: "15_embeddings_vectorstores",
        hints: &[
            "Use the embedding model's embed_documents() method",
            "Pass a list of texts, get a list of vectors back",
            "Handle batching for large document sets",
            "Each vector is a list of floats",
        ],
        summary: "model.embed_documents(texts) returns list of embedding vectors",
    },
    CatalogEntry {
        topic_id: "similarity_search",
        category: "15_embeddings_vectorstores",
        hints: &[
            "First embed the query using the same model",
            "Use the vector store's search method",
            "Results are ordered by similarity score",
            "Return top k results with scores",
        ],
        summary: "Embed query, then store.similarity_search(query_embedding, k=k)",
    },
    CatalogEntry {
        topic_id: "basic_rag_chain",
        category: "16_retrieval_chains",
        hints: &[
            "Step 1: Retrieve documents using the retriever",
            "Step 2: Format documents into context string",
            "Step 3: Create prompt with query + context",
            "Step 4: Generate answer using LLM",
            "Step 5: Return answer with sources",
        ],
        summary: "Retrieve → Format Context → Prompt → Generate → Return with sources",
    },
    CatalogEntry {
        topic_id: "rerank_results",
        category: "17_advanced_rag",
        hints: &[
            "Cross-encoders score (query, doc) pairs together",
            "Create pairs of (query, doc.page_content) for each doc",
            "Use reranker.predict(pairs) to get scores",
            "Sort by score descending and take top_k",
        ],
        summary: "pairs = [(query, doc) for doc in docs]; scores = reranker.predict(pairs); sort and return top_k",
    },
    CatalogEntry {
        topic_id: "hybrid_search",
        category: "17_advanced_rag",
        hints: &[
            "Run both vector search and BM25 search",
            "Normalize scores from each method",
            "Combine with alpha weighting: alpha*vector + (1-alpha)*bm25",
            "Use reciprocal rank fusion for combining result lists",
        ],
        summary: "Run both searches, normalize scores, combine with RRF",
    },
    CatalogEntry {
        topic_id: "recall_at_k",
        category: "18_rag_evaluation",
        hints: &[
            "Recall = (relevant docs found) / (total relevant docs)",
            "Only consider the top k retrieved results",
            "Convert lists to sets for intersection",
            "Handle edge case where no relevant docs exist",
        ],
        summary: "len(set(retrieved[:k]) & set(relevant)) / len(relevant)",
    },
    CatalogEntry {
        topic_id: "evaluate_faithfulness",
        category: "18_rag_evaluation",
        hints: &[
            "Extract claims/statements from the answer",
            "Check each claim against the context",
            "Use LLM to determine if claim is supported",
            "Return ratio of supported claims",
        ],
        summary: "Extract claims, verify each against context using LLM, return support ratio",
    },
];

/// Owned records for [`HintRegistry::builtin`](crate::HintRegistry::builtin)
pub fn builtin_records() -> Vec<HintRecord> {
    ENTRIES
        .iter()
        .map(|e| HintRecord::new(e.topic_id, e.category, e.hints.iter().copied(), e.summary))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HintRegistry;

    #[test]
    fn test_builtin_registry_is_valid() {
        let registry = HintRegistry::builtin().unwrap();
        assert_eq!(registry.len(), ENTRIES.len());
        assert!(registry.list_topics().contains(&"initialize_model"));
    }

    #[test]
    fn test_builtin_hint_order() {
        let registry = HintRegistry::builtin().unwrap();
        let hint = registry.get_hint("basic_rag_chain", Some(5)).unwrap();
        assert_eq!(hint.text, "Step 5: Return answer with sources");
        assert_eq!(hint.total, 5);
        assert_eq!(
            registry.get_summary("invoke_model").unwrap(),
            "Call model.invoke(prompt) and return response.content"
        );
    }

    #[test]
    fn test_builtin_categories() {
        let registry = HintRegistry::builtin().unwrap();
        let basics = registry.list_topics_by_category("01_model_basics");
        let ids: Vec<&str> = basics.keys().copied().collect();
        assert_eq!(ids, vec!["batch_model", "initialize_model", "invoke_model", "stream_model"]);
    }
}
