/*!
 * Clients for external translation backends.
 *
 * Currently only a minimal Ollama client. Other backends plug into the
 * pipeline behind the `Translator` trait in `crate::translation`, so adding
 * one here does not touch the orchestrator.
 */

pub mod ollama;
