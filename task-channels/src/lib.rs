// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod channel_wrappers;
pub mod rand_sampler;
pub mod token_deadline;
pub mod tokio_runtime;
