use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Author already registered")]
    AlreadyRegistered,
    #[msg("Author not registered")]
    AuthorNotRegistered,
    #[msg("Title is required")]
    TitleRequired,
    #[msg("Category is required")]
    CategoryRequired,
    #[msg("Title too long (max 128 bytes)")]
    TitleTooLong,
    #[msg("Category too long (max 64 bytes)")]
    CategoryTooLong,
    #[msg("Invalid work id")]
    InvalidWorkId,
    #[msg("Invalid dispute index")]
    InvalidDisputeIndex,
    #[msg("Not authorized")]
    NotAuthorized,
    #[msg("Cannot dispute own work")]
    CannotDisputeOwnWork,
    #[msg("Dispute already resolved")]
    AlreadyResolved,
    #[msg("Dispute resolution already pending")]
    AlreadyPending,
    #[msg("Ciphertext is empty")]
    EmptyCiphertext,
    #[msg("Ciphertext too long (max 256)")]
    CiphertextTooLong,
    #[msg("Signer is not the decryption gateway")]
    NotGateway,
    #[msg("Decryption request already fulfilled")]
    RequestAlreadyFulfilled,
    #[msg("Decryption result handle does not match the request")]
    HandleMismatch,
    #[msg("Dispute is not awaiting this decryption request")]
    RequestMismatch,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
