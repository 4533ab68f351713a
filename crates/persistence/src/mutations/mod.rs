// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inserts, updates and deletes. All use Diesel DSL apart from the
//! `last_insert_rowid()` helper in `backend::sqlite`.

pub mod accounts;
pub mod bookings;
pub mod rooms;
