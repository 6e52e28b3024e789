//! Certificate import, listing and deletion.

use crate::primitives::Blob;
use crate::shapes::{Certificate, Filter, Tag};

shape! {
    ImportCertificateRequest {
        /// Unique among all certificates of the account.
        certificate_identifier: String,
        /// Contents of a `.pem` file.
        certificate_pem: String,
        /// Location of an imported Oracle Wallet certificate.
        certificate_wallet: Blob,
        tags: Vec<Tag>,
    }

    ImportCertificateResult {
        certificate: Certificate,
    }

    DeleteCertificateRequest {
        certificate_arn: String,
    }

    DeleteCertificateResult {
        certificate: Certificate,
    }

    DescribeCertificatesRequest {
        /// Filter names: `certificate-arn`, `certificate-id`.
        filters: Vec<Filter>,
        /// 20-100, default 10.
        max_records: i32,
        marker: String,
    }

    /// One page of certificates plus the marker for the next page.
    DescribeCertificatesResult {
        marker: String,
        certificates: Vec<Certificate>,
    }
}
