/*
[INPUT]:  Enumerated member values documented by the Comprehend API
[OUTPUT]: String-backed Rust enums with an Unknown escape hatch
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the service documents new enumerated values
*/

use crate::contract::wire_enum;

wire_enum! {
    /// Languages accepted by the detection APIs.
    pub enum LanguageCode {
        En => "en",
        Es => "es",
        Fr => "fr",
        De => "de",
        It => "it",
        Pt => "pt",
        Ar => "ar",
        Hi => "hi",
        Ja => "ja",
        Ko => "ko",
        Zh => "zh",
        ZhTw => "zh-TW",
    }
}

wire_enum! {
    /// Languages supported by syntax analysis.
    pub enum SyntaxLanguageCode {
        En => "en",
        Es => "es",
        Fr => "fr",
        De => "de",
        It => "it",
        Pt => "pt",
    }
}

wire_enum! {
    /// Lifecycle of an asynchronous analysis job.
    pub enum JobStatus {
        Submitted => "SUBMITTED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Failed => "FAILED",
        StopRequested => "STOP_REQUESTED",
        Stopped => "STOPPED",
    }
}

wire_enum! {
    /// Training lifecycle of a custom classifier or recognizer.
    pub enum ModelStatus {
        Submitted => "SUBMITTED",
        Training => "TRAINING",
        Deleting => "DELETING",
        StopRequested => "STOP_REQUESTED",
        Stopped => "STOPPED",
        InError => "IN_ERROR",
        Trained => "TRAINED",
        TrainedWithWarning => "TRAINED_WITH_WARNING",
    }
}

wire_enum! {
    pub enum ModelType {
        DocumentClassifier => "DOCUMENT_CLASSIFIER",
        EntityRecognizer => "ENTITY_RECOGNIZER",
    }
}

wire_enum! {
    pub enum EndpointStatus {
        Creating => "CREATING",
        Deleting => "DELETING",
        Failed => "FAILED",
        InService => "IN_SERVICE",
        Updating => "UPDATING",
    }
}

wire_enum! {
    pub enum DatasetType {
        Train => "TRAIN",
        Test => "TEST",
    }
}

wire_enum! {
    pub enum DatasetStatus {
        Creating => "CREATING",
        Completed => "COMPLETED",
        Failed => "FAILED",
    }
}

wire_enum! {
    pub enum DatasetDataFormat {
        ComprehendCsv => "COMPREHEND_CSV",
        AugmentedManifest => "AUGMENTED_MANIFEST",
    }
}

wire_enum! {
    pub enum FlywheelStatus {
        Creating => "CREATING",
        Active => "ACTIVE",
        Updating => "UPDATING",
        Deleting => "DELETING",
        Failed => "FAILED",
    }
}

wire_enum! {
    /// Built-in entity types returned by entity detection.
    pub enum EntityType {
        Person => "PERSON",
        Location => "LOCATION",
        Organization => "ORGANIZATION",
        CommercialItem => "COMMERCIAL_ITEM",
        Event => "EVENT",
        Date => "DATE",
        Quantity => "QUANTITY",
        Title => "TITLE",
        Other => "OTHER",
    }
}

wire_enum! {
    /// Personally identifiable information categories.
    pub enum PiiEntityType {
        BankAccountNumber => "BANK_ACCOUNT_NUMBER",
        BankRouting => "BANK_ROUTING",
        CreditDebitNumber => "CREDIT_DEBIT_NUMBER",
        CreditDebitCvv => "CREDIT_DEBIT_CVV",
        CreditDebitExpiry => "CREDIT_DEBIT_EXPIRY",
        Pin => "PIN",
        Email => "EMAIL",
        Address => "ADDRESS",
        Name => "NAME",
        Phone => "PHONE",
        Ssn => "SSN",
        DateTime => "DATE_TIME",
        PassportNumber => "PASSPORT_NUMBER",
        DriverId => "DRIVER_ID",
        Url => "URL",
        Age => "AGE",
        Username => "USERNAME",
        Password => "PASSWORD",
        AwsAccessKey => "AWS_ACCESS_KEY",
        AwsSecretKey => "AWS_SECRET_KEY",
        IpAddress => "IP_ADDRESS",
        MacAddress => "MAC_ADDRESS",
        All => "ALL",
        LicensePlate => "LICENSE_PLATE",
        VehicleIdentificationNumber => "VEHICLE_IDENTIFICATION_NUMBER",
        UkNationalInsuranceNumber => "UK_NATIONAL_INSURANCE_NUMBER",
        CaSocialInsuranceNumber => "CA_SOCIAL_INSURANCE_NUMBER",
        UsIndividualTaxIdentificationNumber => "US_INDIVIDUAL_TAX_IDENTIFICATION_NUMBER",
        UkUniqueTaxpayerReferenceNumber => "UK_UNIQUE_TAXPAYER_REFERENCE_NUMBER",
        InPermanentAccountNumber => "IN_PERMANENT_ACCOUNT_NUMBER",
        InNrega => "IN_NREGA",
        InternationalBankAccountNumber => "INTERNATIONAL_BANK_ACCOUNT_NUMBER",
        SwiftCode => "SWIFT_CODE",
        UkNationalHealthServiceNumber => "UK_NATIONAL_HEALTH_SERVICE_NUMBER",
        CaHealthNumber => "CA_HEALTH_NUMBER",
        InAadhaar => "IN_AADHAAR",
        InVoterNumber => "IN_VOTER_NUMBER",
    }
}

wire_enum! {
    /// Universal part-of-speech tags.
    pub enum PartOfSpeechTagType {
        Adj => "ADJ",
        Adp => "ADP",
        Adv => "ADV",
        Aux => "AUX",
        Conj => "CONJ",
        Cconj => "CCONJ",
        Det => "DET",
        Intj => "INTJ",
        Noun => "NOUN",
        Num => "NUM",
        O => "O",
        Part => "PART",
        Pron => "PRON",
        Propn => "PROPN",
        Punct => "PUNCT",
        Sconj => "SCONJ",
        Sym => "SYM",
        Verb => "VERB",
    }
}

wire_enum! {
    pub enum SentimentType {
        Positive => "POSITIVE",
        Negative => "NEGATIVE",
        Neutral => "NEUTRAL",
        Mixed => "MIXED",
    }
}

wire_enum! {
    pub enum TargetedSentimentEntityType {
        Person => "PERSON",
        Location => "LOCATION",
        Organization => "ORGANIZATION",
        Facility => "FACILITY",
        Brand => "BRAND",
        CommercialItem => "COMMERCIAL_ITEM",
        Movie => "MOVIE",
        Music => "MUSIC",
        Book => "BOOK",
        Software => "SOFTWARE",
        Game => "GAME",
        PersonalTitle => "PERSONAL_TITLE",
        Event => "EVENT",
        Date => "DATE",
        Quantity => "QUANTITY",
        Attribute => "ATTRIBUTE",
        Other => "OTHER",
    }
}

wire_enum! {
    /// How input files are split into documents.
    pub enum InputFormat {
        OneDocPerFile => "ONE_DOC_PER_FILE",
        OneDocPerLine => "ONE_DOC_PER_LINE",
    }
}

wire_enum! {
    pub enum DocumentClassifierMode {
        MultiClass => "MULTI_CLASS",
        MultiLabel => "MULTI_LABEL",
    }
}

wire_enum! {
    pub enum DocumentClassifierDataFormat {
        ComprehendCsv => "COMPREHEND_CSV",
        AugmentedManifest => "AUGMENTED_MANIFEST",
    }
}

wire_enum! {
    pub enum DocumentClassifierDocumentTypeFormat {
        PlainTextDocument => "PLAIN_TEXT_DOCUMENT",
        SemiStructuredDocument => "SEMI_STRUCTURED_DOCUMENT",
    }
}

wire_enum! {
    pub enum EntityRecognizerDataFormat {
        ComprehendCsv => "COMPREHEND_CSV",
        AugmentedManifest => "AUGMENTED_MANIFEST",
    }
}

wire_enum! {
    pub enum AugmentedManifestsDocumentTypeFormat {
        PlainTextDocument => "PLAIN_TEXT_DOCUMENT",
        SemiStructuredDocument => "SEMI_STRUCTURED_DOCUMENT",
    }
}

wire_enum! {
    pub enum Split {
        Train => "TRAIN",
        Test => "TEST",
    }
}

wire_enum! {
    /// Textract API used to extract text from image files and scanned PDFs.
    pub enum DocumentReadAction {
        TextractDetectDocumentText => "TEXTRACT_DETECT_DOCUMENT_TEXT",
        TextractAnalyzeDocument => "TEXTRACT_ANALYZE_DOCUMENT",
    }
}

wire_enum! {
    pub enum DocumentReadMode {
        ServiceDefault => "SERVICE_DEFAULT",
        ForceDocumentReadAction => "FORCE_DOCUMENT_READ_ACTION",
    }
}

wire_enum! {
    pub enum DocumentReadFeatureTypes {
        Tables => "TABLES",
        Forms => "FORMS",
    }
}

wire_enum! {
    pub enum DocumentType {
        NativePdf => "NATIVE_PDF",
        ScannedPdf => "SCANNED_PDF",
        MsWord => "MS_WORD",
        Image => "IMAGE",
        PlainText => "PLAIN_TEXT",
        TextractDetectDocumentTextJson => "TEXTRACT_DETECT_DOCUMENT_TEXT_JSON",
        TextractAnalyzeDocumentJson => "TEXTRACT_ANALYZE_DOCUMENT_JSON",
    }
}

wire_enum! {
    pub enum BlockType {
        Line => "LINE",
        Word => "WORD",
    }
}

wire_enum! {
    pub enum RelationshipType {
        Child => "CHILD",
    }
}

wire_enum! {
    pub enum PageBasedErrorCode {
        TextractBadPage => "TEXTRACT_BAD_PAGE",
        TextractProvisionedThroughputExceeded => "TEXTRACT_PROVISIONED_THROUGHPUT_EXCEEDED",
        PageCharactersExceeded => "PAGE_CHARACTERS_EXCEEDED",
        PageSizeExceeded => "PAGE_SIZE_EXCEEDED",
        InternalServerError => "INTERNAL_SERVER_ERROR",
    }
}

wire_enum! {
    pub enum PageBasedWarningCode {
        InferencingPlaintextWithNativeTrainedModel => "INFERENCING_PLAINTEXT_WITH_NATIVE_TRAINED_MODEL",
        InferencingNativeDocumentWithPlaintextTrainedModel => "INFERENCING_NATIVE_DOCUMENT_WITH_PLAINTEXT_TRAINED_MODEL",
    }
}

wire_enum! {
    /// Whether a PII job returns offsets or a redacted copy of the input.
    pub enum PiiEntitiesDetectionMode {
        OnlyRedaction => "ONLY_REDACTION",
        OnlyOffsets => "ONLY_OFFSETS",
    }
}

wire_enum! {
    pub enum PiiEntitiesDetectionMaskMode {
        Mask => "MASK",
        ReplaceWithPiiEntityType => "REPLACE_WITH_PII_ENTITY_TYPE",
    }
}
