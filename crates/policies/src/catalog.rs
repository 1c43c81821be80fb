// Generated by samkit-policygen from the AWS SAM policy template catalogue.
// Do not edit by hand; re-run the generator to refresh.

use crate::template::PolicyTemplate;
use crate::Factory;

pub const AMI_DESCRIBE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "AMIDescribePolicy",
    description: "Gives permissions to describe AMIs",
    effect: "Allow",
    actions: &["ec2:DescribeImages"],
    resources: &["arn:${AWS::Partition}:ec2:${AWS::Region}:${AWS::AccountId}:image/*"],
    parameters: &[],
};

pub const AWS_SECRETS_MANAGER_GET_SECRET_VALUE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "AWSSecretsManagerGetSecretValuePolicy",
    description: "Grants permissions to GetSecretValue for the specified AWS Secrets Manager secret",
    effect: "Allow",
    actions: &["secretsmanager:GetSecretValue"],
    resources: &["${secretArn}"],
    parameters: &["secretArn"],
};

pub const AWS_SECRETS_MANAGER_ROTATION_POLICY: PolicyTemplate = PolicyTemplate {
    name: "AWSSecretsManagerRotationPolicy",
    description: "Grants permissions to APIs required to rotate a secret in AWS Secrets Manager",
    effect: "Allow",
    actions: &["secretsmanager:DescribeSecret", "secretsmanager:GetSecretValue", "secretsmanager:PutSecretValue", "secretsmanager:UpdateSecretVersionStage"],
    resources: &["arn:${AWS::Partition}:secretsmanager:${AWS::Region}:${AWS::AccountId}:secret:*"],
    parameters: &[],
};

pub const ATHENA_QUERY_POLICY: PolicyTemplate = PolicyTemplate {
    name: "AthenaQueryPolicy",
    description: "Gives permissions to execute Athena queries",
    effect: "Allow",
    actions: &["athena:ListWorkGroups", "athena:GetExecutionEngine", "athena:GetExecutionEngines", "athena:GetNamespace", "athena:GetCatalogs", "athena:GetNamespaces", "athena:GetTables", "athena:GetTable"],
    resources: &["*"],
    parameters: &[],
};

pub const CLOUD_FORMATION_DESCRIBE_STACKS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CloudFormationDescribeStacksPolicy",
    description: "Gives permission to describe CloudFormation stacks",
    effect: "Allow",
    actions: &["cloudformation:DescribeStacks"],
    resources: &["arn:${AWS::Partition}:cloudformation:${AWS::Region}:${AWS::AccountId}:stack/*"],
    parameters: &[],
};

pub const CLOUD_WATCH_DASHBOARD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CloudWatchDashboardPolicy",
    description: "Gives permissions to put metrics to operate on CloudWatch Dashboards",
    effect: "Allow",
    actions: &["cloudwatch:GetDashboard", "cloudwatch:ListDashboards", "cloudwatch:PutDashboard", "cloudwatch:ListMetrics"],
    resources: &["*"],
    parameters: &[],
};

pub const CLOUD_WATCH_DESCRIBE_ALARM_HISTORY_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CloudWatchDescribeAlarmHistoryPolicy",
    description: "Gives permissions to describe CloudWatch alarm history",
    effect: "Allow",
    actions: &["cloudwatch:DescribeAlarmHistory"],
    resources: &["*"],
    parameters: &[],
};

pub const CLOUD_WATCH_PUT_METRIC_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CloudWatchPutMetricPolicy",
    description: "Gives permissions to put metrics to CloudWatch",
    effect: "Allow",
    actions: &["cloudwatch:PutMetricData"],
    resources: &["*"],
    parameters: &[],
};

pub const CODE_COMMIT_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CodeCommitCrudPolicy",
    description: "Gives permissions to create/read/update/delete objects within a specific codecommit repository",
    effect: "Allow",
    actions: &["codecommit:GitPull", "codecommit:GitPush", "codecommit:CreateBranch", "codecommit:DeleteBranch", "codecommit:GetBranch", "codecommit:ListBranches", "codecommit:MergeBranchesByFastForward", "codecommit:MergeBranchesBySquash", "codecommit:MergeBranchesByThreeWay", "codecommit:UpdateDefaultBranch", "codecommit:BatchDescribeMergeConflicts", "codecommit:CreateUnreferencedMergeCommit", "codecommit:DescribeMergeConflicts", "codecommit:GetMergeCommit", "codecommit:GetMergeOptions", "codecommit:BatchGetPullRequests", "codecommit:CreatePullRequest", "codecommit:DescribePullRequestEvents", "codecommit:GetCommentsForPullRequest", "codecommit:GetCommitsFromMergeBase", "codecommit:GetMergeConflicts", "codecommit:GetPullRequest", "codecommit:ListPullRequests", "codecommit:MergePullRequestByFastForward", "codecommit:MergePullRequestBySquash", "codecommit:MergePullRequestByThreeWay", "codecommit:PostCommentForPullRequest", "codecommit:UpdatePullRequestDescription", "codecommit:UpdatePullRequestStatus", "codecommit:UpdatePullRequestTitle", "codecommit:DeleteFile", "codecommit:GetBlob", "codecommit:GetFile", "codecommit:GetFolder", "codecommit:PutFile", "codecommit:DeleteCommentContent", "codecommit:GetComment", "codecommit:GetCommentsForComparedCommit", "codecommit:PostCommentForComparedCommit", "codecommit:PostCommentReply", "codecommit:UpdateComment", "codecommit:BatchGetCommits", "codecommit:CreateCommit", "codecommit:GetCommit", "codecommit:GetCommitHistory", "codecommit:GetDifferences", "codecommit:GetObjectIdentifier", "codecommit:GetReferences", "codecommit:GetTree", "codecommit:GetRepository", "codecommit:UpdateRepositoryDescription", "codecommit:ListTagsForResource", "codecommit:TagResource", "codecommit:UntagResource", "codecommit:GetRepositoryTriggers", "codecommit:PutRepositoryTriggers", "codecommit:TestRepositoryTriggers", "codecommit:GetBranch", "codecommit:GetCommit", "codecommit:UploadArchive", "codecommit:GetUploadArchiveStatus", "codecommit:CancelUploadArchive"],
    resources: &["arn:${AWS::Partition}:codecommit:${AWS::Region}:${AWS::AccountId}:${repositoryName}"],
    parameters: &["repositoryName"],
};

pub const CODE_COMMIT_READ_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CodeCommitReadPolicy",
    description: "Gives permissions to read objects within a specific codecommit repository",
    effect: "Allow",
    actions: &["codecommit:GitPull", "codecommit:GetBranch", "codecommit:ListBranches", "codecommit:BatchDescribeMergeConflicts", "codecommit:DescribeMergeConflicts", "codecommit:GetMergeCommit", "codecommit:GetMergeOptions", "codecommit:BatchGetPullRequests", "codecommit:DescribePullRequestEvents", "codecommit:GetCommentsForPullRequest", "codecommit:GetCommitsFromMergeBase", "codecommit:GetMergeConflicts", "codecommit:GetPullRequest", "codecommit:ListPullRequests", "codecommit:GetBlob", "codecommit:GetFile", "codecommit:GetFolder", "codecommit:GetComment", "codecommit:GetCommentsForComparedCommit", "codecommit:BatchGetCommits", "codecommit:GetCommit", "codecommit:GetCommitHistory", "codecommit:GetDifferences", "codecommit:GetObjectIdentifier", "codecommit:GetReferences", "codecommit:GetTree", "codecommit:GetRepository", "codecommit:ListTagsForResource", "codecommit:GetRepositoryTriggers", "codecommit:TestRepositoryTriggers", "codecommit:GetBranch", "codecommit:GetCommit", "codecommit:GetUploadArchiveStatus"],
    resources: &["arn:${AWS::Partition}:codecommit:${AWS::Region}:${AWS::AccountId}:${repositoryName}"],
    parameters: &["repositoryName"],
};

pub const CODE_PIPELINE_LAMBDA_EXECUTION_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CodePipelineLambdaExecutionPolicy",
    description: "Gives permission for a Lambda function invoked by AWS CodePipeline to report back status of the job",
    effect: "Allow",
    actions: &["codepipeline:PutJobSuccessResult", "codepipeline:PutJobFailureResult"],
    resources: &["*"],
    parameters: &[],
};

pub const CODE_PIPELINE_READ_ONLY_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CodePipelineReadOnlyPolicy",
    description: "Gives read permissions to get details about a CodePipeline pipeline",
    effect: "Allow",
    actions: &["codepipeline:ListPipelineExecutions"],
    resources: &["arn:${AWS::Partition}:codepipeline:${AWS::Region}:${AWS::AccountId}:${pipelinename}"],
    parameters: &["pipelinename"],
};

pub const COMPREHEND_BASIC_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "ComprehendBasicAccessPolicy",
    description: "Gives access to Amazon Comprehend APIs for detecting entities, key phrases, languages and sentiments",
    effect: "Allow",
    actions: &["comprehend:BatchDetectKeyPhrases", "comprehend:DetectDominantLanguage", "comprehend:DetectEntities", "comprehend:BatchDetectEntities", "comprehend:DetectKeyPhrases", "comprehend:DetectSentiment", "comprehend:BatchDetectDominantLanguage", "comprehend:BatchDetectSentiment"],
    resources: &["*"],
    parameters: &[],
};

pub const COST_EXPLORER_READ_ONLY_POLICY: PolicyTemplate = PolicyTemplate {
    name: "CostExplorerReadOnlyPolicy",
    description: "Gives access to the readonly Cost Explorer APIs for billing history",
    effect: "Allow",
    actions: &["ce:GetCostAndUsage", "ce:GetDimensionValues", "ce:GetReservationCoverage", "ce:GetReservationPurchaseRecommendation", "ce:GetReservationUtilization", "ce:GetTags"],
    resources: &["*"],
    parameters: &[],
};

pub const DYNAMO_DB_BACKUP_FULL_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "DynamoDBBackupFullAccessPolicy",
    description: "Gives read/write permissions to DynamoDB on-demand backups for a table",
    effect: "Allow",
    actions: &["dynamodb:CreateBackup", "dynamodb:DescribeContinuousBackups"],
    resources: &["arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}"],
    parameters: &["tableName"],
};

pub const DYNAMO_DB_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "DynamoDBCrudPolicy",
    description: "Gives CRUD access to a DynamoDB Table",
    effect: "Allow",
    actions: &["dynamodb:GetItem", "dynamodb:DeleteItem", "dynamodb:PutItem", "dynamodb:Scan", "dynamodb:Query", "dynamodb:UpdateItem", "dynamodb:BatchWriteItem", "dynamodb:BatchGetItem", "dynamodb:DescribeTable", "dynamodb:ConditionCheckItem"],
    resources: &["arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}", "arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}/index/*"],
    parameters: &["tableName"],
};

pub const DYNAMO_DB_READ_POLICY: PolicyTemplate = PolicyTemplate {
    name: "DynamoDBReadPolicy",
    description: "Gives read only access to a DynamoDB Table",
    effect: "Allow",
    actions: &["dynamodb:GetItem", "dynamodb:Scan", "dynamodb:Query", "dynamodb:BatchGetItem", "dynamodb:DescribeTable"],
    resources: &["arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}", "arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}/index/*"],
    parameters: &["tableName"],
};

pub const DYNAMO_DB_RECONFIGURE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "DynamoDBReconfigurePolicy",
    description: "Gives access reconfigure to a DynamoDB Table",
    effect: "Allow",
    actions: &["dynamodb:UpdateTable"],
    resources: &["arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}"],
    parameters: &["tableName"],
};

pub const DYNAMO_DB_RESTORE_FROM_BACKUP_POLICY: PolicyTemplate = PolicyTemplate {
    name: "DynamoDBRestoreFromBackupPolicy",
    description: "Gives permissions to restore a table from backup",
    effect: "Allow",
    actions: &["dynamodb:RestoreTableFromBackup"],
    resources: &["arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}/backup/*"],
    parameters: &["tableName"],
};

pub const DYNAMO_DB_STREAM_READ_POLICY: PolicyTemplate = PolicyTemplate {
    name: "DynamoDBStreamReadPolicy",
    description: "Gives permission to describe and read a DynamoDB Stream and Records",
    effect: "Allow",
    actions: &["dynamodb:DescribeStream", "dynamodb:GetRecords", "dynamodb:GetShardIterator"],
    resources: &["arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}/stream/${streamName}"],
    parameters: &["streamName", "tableName"],
};

pub const DYNAMO_DB_WRITE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "DynamoDBWritePolicy",
    description: "Gives write only access to a DynamoDB Table",
    effect: "Allow",
    actions: &["dynamodb:PutItem", "dynamodb:UpdateItem", "dynamodb:BatchWriteItem"],
    resources: &["arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}", "arn:${AWS::Partition}:dynamodb:${AWS::Region}:${AWS::AccountId}:table/${tableName}/index/*"],
    parameters: &["tableName"],
};

pub const EC2_COPY_IMAGE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "EC2CopyImagePolicy",
    description: "Gives permission top copy EC2 Images",
    effect: "Allow",
    actions: &["ec2:CopyImage"],
    resources: &["arn:${AWS::Partition}:ec2:${AWS::Region}:${AWS::AccountId}:image/${imageId}"],
    parameters: &["imageId"],
};

pub const EC2_DESCRIBE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "EC2DescribePolicy",
    description: "Gives permission to describe EC2 instances",
    effect: "Allow",
    actions: &["ec2:DescribeRegions", "ec2:DescribeInstances"],
    resources: &["*"],
    parameters: &[],
};

pub const EKS_DESCRIBE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "EKSDescribePolicy",
    description: "Gives permission to describe or list Amazon EKS clusters",
    effect: "Allow",
    actions: &["eks:DescribeCluster", "eks:ListClusters"],
    resources: &["*"],
    parameters: &[],
};

pub const ELASTICSEARCH_HTTP_POST_POLICY: PolicyTemplate = PolicyTemplate {
    name: "ElasticsearchHttpPostPolicy",
    description: "Gives POST and PUT permissions to Elasticsearch",
    effect: "Allow",
    actions: &["es:ESHttpPost", "es:ESHttpPut"],
    resources: &["arn:${AWS::Partition}:es:${AWS::Region}:${AWS::AccountId}:domain/${domainName}/*"],
    parameters: &["domainName"],
};

pub const EVENT_BRIDGE_PUT_EVENTS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "EventBridgePutEventsPolicy",
    description: "Gives permissions to send events to EventBridge",
    effect: "Allow",
    actions: &["events:PutEvents"],
    resources: &["arn:${AWS::Partition}:events:${AWS::Region}:${AWS::AccountId}:event-bus/${eventBusName}"],
    parameters: &["eventBusName"],
};

pub const FILTER_LOG_EVENTS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "FilterLogEventsPolicy",
    description: "Gives permission to filter Log Events from a specified Log Group",
    effect: "Allow",
    actions: &["logs:FilterLogEvents"],
    resources: &["arn:${AWS::Partition}:logs:${AWS::Region}:${AWS::AccountId}:log-group:${logGroupName}:log-stream:*"],
    parameters: &["logGroupName"],
};

pub const FIREHOSE_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "FirehoseCrudPolicy",
    description: "Gives permission to create, write to, update, and delete a Kinesis Firehose Delivery Stream",
    effect: "Allow",
    actions: &["firehose:CreateDeliveryStream", "firehose:DeleteDeliveryStream", "firehose:DescribeDeliveryStream", "firehose:PutRecord", "firehose:PutRecordBatch", "firehose:UpdateDestination"],
    resources: &["arn:${AWS::Partition}:firehose:${AWS::Region}:${AWS::AccountId}:deliverystream/${deliveryStreamName}"],
    parameters: &["deliveryStreamName"],
};

pub const FIREHOSE_WRITE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "FirehoseWritePolicy",
    description: "Gives permission to write to a Kinesis Firehose Delivery Stream",
    effect: "Allow",
    actions: &["firehose:PutRecord", "firehose:PutRecordBatch"],
    resources: &["arn:${AWS::Partition}:firehose:${AWS::Region}:${AWS::AccountId}:deliverystream/${deliveryStreamName}"],
    parameters: &["deliveryStreamName"],
};

pub const KMS_DECRYPT_POLICY: PolicyTemplate = PolicyTemplate {
    name: "KMSDecryptPolicy",
    description: "Gives permission to decrypt with KMS Key",
    effect: "Allow",
    actions: &["kms:Decrypt"],
    resources: &["arn:${AWS::Partition}:kms:${AWS::Region}:${AWS::AccountId}:key/${keyId}"],
    parameters: &["keyId"],
};

pub const KMS_ENCRYPT_POLICY: PolicyTemplate = PolicyTemplate {
    name: "KMSEncryptPolicy",
    description: "Gives permission to encrypt with KMS Key",
    effect: "Allow",
    actions: &["kms:Encrypt"],
    resources: &["arn:${AWS::Partition}:kms:${AWS::Region}:${AWS::AccountId}:key/${keyId}"],
    parameters: &["keyId"],
};

pub const KINESIS_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "KinesisCrudPolicy",
    description: "Gives permission to create, publish and delete Kinesis Stream",
    effect: "Allow",
    actions: &["kinesis:AddTagsToStream", "kinesis:CreateStream", "kinesis:DecreaseStreamRetentionPeriod", "kinesis:DeleteStream", "kinesis:DescribeStream", "kinesis:DescribeStreamSummary", "kinesis:GetShardIterator", "kinesis:IncreaseStreamRetentionPeriod", "kinesis:ListTagsForStream", "kinesis:MergeShards", "kinesis:PutRecord", "kinesis:PutRecords", "kinesis:SplitShard", "kinesis:RemoveTagsFromStream"],
    resources: &["arn:${AWS::Partition}:kinesis:${AWS::Region}:${AWS::AccountId}:stream/${streamName}"],
    parameters: &["streamName"],
};

pub const KINESIS_STREAM_READ_POLICY: PolicyTemplate = PolicyTemplate {
    name: "KinesisStreamReadPolicy",
    description: "Gives permission to list and read a Kinesis stream",
    effect: "Allow",
    actions: &["kinesis:ListStreams", "kinesis:DescribeLimits"],
    resources: &["arn:${AWS::Partition}:kinesis:${AWS::Region}:${AWS::AccountId}:stream/*"],
    parameters: &[],
};

pub const LAMBDA_INVOKE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "LambdaInvokePolicy",
    description: "Gives permission to invoke a Lambda Function, Alias or Version",
    effect: "Allow",
    actions: &["lambda:InvokeFunction"],
    resources: &["arn:${AWS::Partition}:lambda:${AWS::Region}:${AWS::AccountId}:function:${functionName}*"],
    parameters: &["functionName"],
};

pub const MOBILE_ANALYTICS_WRITE_ONLY_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "MobileAnalyticsWriteOnlyAccessPolicy",
    description: "Gives write only permissions to put event data for all application resources",
    effect: "Allow",
    actions: &["mobileanalytics:PutEvents"],
    resources: &["*"],
    parameters: &[],
};

pub const ORGANIZATIONS_LIST_ACCOUNTS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "OrganizationsListAccountsPolicy",
    description: "Gives readonly permission to list child account names and ids",
    effect: "Allow",
    actions: &["organizations:ListAccounts"],
    resources: &["*"],
    parameters: &[],
};

pub const PINPOINT_ENDPOINT_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "PinpointEndpointAccessPolicy",
    description: "Gives permissions to get and update endpoints for a Pinpoint application",
    effect: "Allow",
    actions: &["mobiletargeting:GetEndpoint", "mobiletargeting:UpdateEndpoint", "mobiletargeting:UpdateEndpointsBatch"],
    resources: &["arn:${AWS::Partition}:mobiletargeting:${AWS::Region}:${AWS::AccountId}:apps/${pinpointApplicationId}/endpoints/*"],
    parameters: &["pinpointApplicationId"],
};

pub const POLLY_FULL_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "PollyFullAccessPolicy",
    description: "Gives full access permissions to Polly lexicon resources",
    effect: "Allow",
    actions: &["polly:GetLexicon", "polly:DeleteLexicon", "polly:DescribeVoices", "polly:ListLexicons", "polly:PutLexicon", "polly:SynthesizeSpeech"],
    resources: &["arn:${AWS::Partition}:polly:${AWS::Region}:${AWS::AccountId}:lexicon/${lexiconName}", "arn:${AWS::Partition}:polly:${AWS::Region}:${AWS::AccountId}:lexicon/*"],
    parameters: &["lexiconName"],
};

pub const REKOGNITION_DETECT_ONLY_POLICY: PolicyTemplate = PolicyTemplate {
    name: "RekognitionDetectOnlyPolicy",
    description: "Gives permission to detect faces, labels and text",
    effect: "Allow",
    actions: &["rekognition:DetectFaces", "rekognition:DetectLabels", "rekognition:DetectModerationLabels", "rekognition:DetectText"],
    resources: &["*"],
    parameters: &[],
};

pub const REKOGNITION_FACES_MANAGEMENT_POLICY: PolicyTemplate = PolicyTemplate {
    name: "RekognitionFacesManagementPolicy",
    description: "Gives permission to add, delete and search faces in a collection",
    effect: "Allow",
    actions: &["rekognition:IndexFaces", "rekognition:DeleteFaces", "rekognition:SearchFaces", "rekognition:SearchFacesByImage", "rekognition:ListFaces"],
    resources: &["arn:${AWS::Partition}:rekognition:${AWS::Region}:${AWS::AccountId}:collection/${collectionId}"],
    parameters: &["collectionId"],
};

pub const REKOGNITION_FACES_POLICY: PolicyTemplate = PolicyTemplate {
    name: "RekognitionFacesPolicy",
    description: "Gives permission to compare and detect faces and labels",
    effect: "Allow",
    actions: &["rekognition:CompareFaces", "rekognition:DetectFaces"],
    resources: &["*"],
    parameters: &[],
};

pub const REKOGNITION_LABELS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "RekognitionLabelsPolicy",
    description: "Gives permission to detect object and moderation labels",
    effect: "Allow",
    actions: &["rekognition:DetectLabels", "rekognition:DetectModerationLabels"],
    resources: &["*"],
    parameters: &[],
};

pub const REKOGNITION_NO_DATA_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "RekognitionNoDataAccessPolicy",
    description: "Gives permission to compare and detect faces and labels",
    effect: "Allow",
    actions: &["rekognition:CompareFaces", "rekognition:DetectFaces", "rekognition:DetectLabels", "rekognition:DetectModerationLabels"],
    resources: &["arn:${AWS::Partition}:rekognition:${AWS::Region}:${AWS::AccountId}:collection/${collectionId}"],
    parameters: &["collectionId"],
};

pub const REKOGNITION_READ_POLICY: PolicyTemplate = PolicyTemplate {
    name: "RekognitionReadPolicy",
    description: "Gives permission to list and search faces",
    effect: "Allow",
    actions: &["rekognition:ListCollections", "rekognition:ListFaces", "rekognition:SearchFaces", "rekognition:SearchFacesByImage"],
    resources: &["arn:${AWS::Partition}:rekognition:${AWS::Region}:${AWS::AccountId}:collection/${collectionId}"],
    parameters: &["collectionId"],
};

pub const REKOGNITION_WRITE_ONLY_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "RekognitionWriteOnlyAccessPolicy",
    description: "Gives permission to create collection and index faces",
    effect: "Allow",
    actions: &["rekognition:CreateCollection", "rekognition:IndexFaces"],
    resources: &["arn:${AWS::Partition}:rekognition:${AWS::Region}:${AWS::AccountId}:collection/${collectionId}"],
    parameters: &["collectionId"],
};

pub const S3_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "S3CrudPolicy",
    description: "Gives CRUD permissions to objects in the S3 Bucket",
    effect: "Allow",
    actions: &["s3:GetObject", "s3:ListBucket", "s3:GetBucketLocation", "s3:GetObjectVersion", "s3:PutObject", "s3:PutObjectAcl", "s3:GetLifecycleConfiguration", "s3:PutLifecycleConfiguration", "s3:DeleteObject"],
    resources: &["arn:${AWS::Partition}:s3:::${bucketName}", "arn:${AWS::Partition}:s3:::${bucketName}/*"],
    parameters: &["bucketName"],
};

pub const S3_FULL_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "S3FullAccessPolicy",
    description: "Gives full access permissions to objects in the S3 Bucket",
    effect: "Allow",
    actions: &["s3:GetObject", "s3:GetObjectAcl", "s3:GetObjectVersion", "s3:PutObject", "s3:PutObjectAcl", "s3:DeleteObject", "s3:DeleteObjectTagging", "s3:DeleteObjectVersionTagging", "s3:GetObjectTagging", "s3:GetObjectVersionTagging", "s3:PutObjectTagging", "s3:PutObjectVersionTagging", "s3:ListBucket", "s3:GetBucketLocation", "s3:GetLifecycleConfiguration", "s3:PutLifecycleConfiguration"],
    resources: &["arn:${AWS::Partition}:s3:::${bucketName}/*", "arn:${AWS::Partition}:s3:::${bucketName}"],
    parameters: &["bucketName"],
};

pub const S3_READ_POLICY: PolicyTemplate = PolicyTemplate {
    name: "S3ReadPolicy",
    description: "Gives read permissions to objects in the S3 Bucket",
    effect: "Allow",
    actions: &["s3:GetObject", "s3:ListBucket", "s3:GetBucketLocation", "s3:GetObjectVersion", "s3:GetLifecycleConfiguration"],
    resources: &["arn:${AWS::Partition}:s3:::${bucketName}", "arn:${AWS::Partition}:s3:::${bucketName}/*"],
    parameters: &["bucketName"],
};

pub const S3_WRITE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "S3WritePolicy",
    description: "Gives write permissions to objects in the S3 Bucket",
    effect: "Allow",
    actions: &["s3:PutObject", "s3:PutObjectAcl", "s3:PutLifecycleConfiguration"],
    resources: &["arn:${AWS::Partition}:s3:::${bucketName}", "arn:${AWS::Partition}:s3:::${bucketName}/*"],
    parameters: &["bucketName"],
};

pub const SES_BULK_TEMPLATED_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SESBulkTemplatedCrudPolicy",
    description: "Gives permission to send email, templated email, templated bulk emails and verify identity",
    effect: "Allow",
    actions: &["ses:GetIdentityVerificationAttributes", "ses:SendEmail", "ses:SendRawEmail", "ses:SendTemplatedEmail", "ses:SendBulkTemplatedEmail", "ses:VerifyEmailIdentity"],
    resources: &["arn:${AWS::Partition}:ses:${AWS::Region}:${AWS::AccountId}:identity/${identityName}"],
    parameters: &["identityName"],
};

pub const SES_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SESCrudPolicy",
    description: "Gives permission to send email and verify identity",
    effect: "Allow",
    actions: &["ses:GetIdentityVerificationAttributes", "ses:SendEmail", "ses:SendRawEmail", "ses:VerifyEmailIdentity"],
    resources: &["arn:${AWS::Partition}:ses:${AWS::Region}:${AWS::AccountId}:identity/${identityName}"],
    parameters: &["identityName"],
};

pub const SES_EMAIL_TEMPLATE_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SESEmailTemplateCrudPolicy",
    description: "Gives permission to create, get, list, update and delete SES Email Templates",
    effect: "Allow",
    actions: &["ses:CreateTemplate", "ses:GetTemplate", "ses:ListTemplates", "ses:UpdateTemplate", "ses:DeleteTemplate", "ses:TestRenderTemplate"],
    resources: &["*"],
    parameters: &[],
};

pub const SES_SEND_BOUNCE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SESSendBouncePolicy",
    description: "Gives SendBounce permission to a SES identity",
    effect: "Allow",
    actions: &["ses:SendBounce"],
    resources: &["arn:${AWS::Partition}:ses:${AWS::Region}:${AWS::AccountId}:identity/${identityName}"],
    parameters: &["identityName"],
};

pub const SNS_CRUD_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SNSCrudPolicy",
    description: "Gives permissions to create, publish and subscribe to SNS topics",
    effect: "Allow",
    actions: &["sns:ListSubscriptionsByTopic", "sns:CreateTopic", "sns:SetTopicAttributes", "sns:Subscribe", "sns:Publish"],
    resources: &["arn:${AWS::Partition}:sns:${AWS::Region}:${AWS::AccountId}:${topicName}*"],
    parameters: &["topicName"],
};

pub const SNS_PUBLISH_MESSAGE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SNSPublishMessagePolicy",
    description: "Gives permission to publish message to SNS Topic",
    effect: "Allow",
    actions: &["sns:Publish"],
    resources: &["arn:${AWS::Partition}:sns:${AWS::Region}:${AWS::AccountId}:${topicName}"],
    parameters: &["topicName"],
};

pub const SQS_POLLER_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SQSPollerPolicy",
    description: "Gives permissions to poll an SQS Queue",
    effect: "Allow",
    actions: &["sqs:ChangeMessageVisibility", "sqs:ChangeMessageVisibilityBatch", "sqs:DeleteMessage", "sqs:DeleteMessageBatch", "sqs:GetQueueAttributes", "sqs:ReceiveMessage"],
    resources: &["arn:${AWS::Partition}:sqs:${AWS::Region}:${AWS::AccountId}:${queueName}"],
    parameters: &["queueName"],
};

pub const SQS_SEND_MESSAGE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SQSSendMessagePolicy",
    description: "Gives permission to send message to SQS Queue",
    effect: "Allow",
    actions: &["sqs:SendMessage*"],
    resources: &["arn:${AWS::Partition}:sqs:${AWS::Region}:${AWS::AccountId}:${queueName}"],
    parameters: &["queueName"],
};

pub const SSM_PARAMETER_READ_POLICY: PolicyTemplate = PolicyTemplate {
    name: "SSMParameterReadPolicy",
    description: "Gives access to a parameter to load secrets in this account. If not using default key, KMSDecryptPolicy will also be needed.",
    effect: "Allow",
    actions: &["ssm:DescribeParameters"],
    resources: &["*"],
    parameters: &[],
};

pub const SERVERLESS_REPO_READ_WRITE_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "ServerlessRepoReadWriteAccessPolicy",
    description: "Gives access permissions to create and list applications in the AWS Serverless Application Repository service",
    effect: "Allow",
    actions: &["serverlessrepo:CreateApplication", "serverlessrepo:CreateApplicationVersion", "serverlessrepo:UpdateApplication", "serverlessrepo:GetApplication", "serverlessrepo:ListApplications", "serverlessrepo:ListApplicationVersions", "serverlessrepo:ListApplicationDependencies"],
    resources: &["arn:${AWS::Partition}:serverlessrepo:${AWS::Region}:${AWS::AccountId}:applications/*"],
    parameters: &[],
};

pub const STEP_FUNCTIONS_EXECUTION_POLICY: PolicyTemplate = PolicyTemplate {
    name: "StepFunctionsExecutionPolicy",
    description: "Gives permission to start a Step Functions state machine execution",
    effect: "Allow",
    actions: &["states:StartExecution"],
    resources: &["arn:${AWS::Partition}:states:${AWS::Region}:${AWS::AccountId}:stateMachine:${stateMachineName}"],
    parameters: &["stateMachineName"],
};

pub const TEXTRACT_DETECT_ANALYZE_POLICY: PolicyTemplate = PolicyTemplate {
    name: "TextractDetectAnalyzePolicy",
    description: "Gives access to detect and analyze documents with Textract",
    effect: "Allow",
    actions: &["textract:DetectDocumentText", "textract:StartDocumentTextDetection", "textract:StartDocumentAnalysis", "textract:AnalyzeDocument"],
    resources: &["*"],
    parameters: &[],
};

pub const TEXTRACT_GET_RESULT_POLICY: PolicyTemplate = PolicyTemplate {
    name: "TextractGetResultPolicy",
    description: "Gives access to get detected and analyzed documents from Textract",
    effect: "Allow",
    actions: &["textract:GetDocumentTextDetection", "textract:GetDocumentAnalysis"],
    resources: &["*"],
    parameters: &[],
};

pub const TEXTRACT_POLICY: PolicyTemplate = PolicyTemplate {
    name: "TextractPolicy",
    description: "Gives full access to Textract",
    effect: "Allow",
    actions: &["textract:*"],
    resources: &["*"],
    parameters: &[],
};

pub const VPC_ACCESS_POLICY: PolicyTemplate = PolicyTemplate {
    name: "VPCAccessPolicy",
    description: "Gives access to create, delete, describe and detach ENIs",
    effect: "Allow",
    actions: &["ec2:CreateNetworkInterface", "ec2:DeleteNetworkInterface", "ec2:DescribeNetworkInterfaces", "ec2:DetachNetworkInterface"],
    resources: &["*"],
    parameters: &[],
};

impl Factory {
    /// Gives permissions to describe AMIs
    pub fn add_ami_describe_policy(&mut self) {
        self.append(&AMI_DESCRIBE_POLICY, &[]);
    }

    /// Grants permissions to GetSecretValue for the specified AWS Secrets Manager secret
    pub fn add_aws_secrets_manager_get_secret_value_policy(&mut self, secret_arn: &str) {
        self.append(&AWS_SECRETS_MANAGER_GET_SECRET_VALUE_POLICY, &[secret_arn]);
    }

    /// Grants permissions to APIs required to rotate a secret in AWS Secrets Manager
    pub fn add_aws_secrets_manager_rotation_policy(&mut self) {
        self.append(&AWS_SECRETS_MANAGER_ROTATION_POLICY, &[]);
    }

    /// Gives permissions to execute Athena queries
    pub fn add_athena_query_policy(&mut self) {
        self.append(&ATHENA_QUERY_POLICY, &[]);
    }

    /// Gives permission to describe CloudFormation stacks
    pub fn add_cloud_formation_describe_stacks_policy(&mut self) {
        self.append(&CLOUD_FORMATION_DESCRIBE_STACKS_POLICY, &[]);
    }

    /// Gives permissions to put metrics to operate on CloudWatch Dashboards
    pub fn add_cloud_watch_dashboard_policy(&mut self) {
        self.append(&CLOUD_WATCH_DASHBOARD_POLICY, &[]);
    }

    /// Gives permissions to describe CloudWatch alarm history
    pub fn add_cloud_watch_describe_alarm_history_policy(&mut self) {
        self.append(&CLOUD_WATCH_DESCRIBE_ALARM_HISTORY_POLICY, &[]);
    }

    /// Gives permissions to put metrics to CloudWatch
    pub fn add_cloud_watch_put_metric_policy(&mut self) {
        self.append(&CLOUD_WATCH_PUT_METRIC_POLICY, &[]);
    }

    /// Gives permissions to create/read/update/delete objects within a specific codecommit repository
    pub fn add_code_commit_crud_policy(&mut self, repository_name: &str) {
        self.append(&CODE_COMMIT_CRUD_POLICY, &[repository_name]);
    }

    /// Gives permissions to read objects within a specific codecommit repository
    pub fn add_code_commit_read_policy(&mut self, repository_name: &str) {
        self.append(&CODE_COMMIT_READ_POLICY, &[repository_name]);
    }

    /// Gives permission for a Lambda function invoked by AWS CodePipeline to report back status of the job
    pub fn add_code_pipeline_lambda_execution_policy(&mut self) {
        self.append(&CODE_PIPELINE_LAMBDA_EXECUTION_POLICY, &[]);
    }

    /// Gives read permissions to get details about a CodePipeline pipeline
    pub fn add_code_pipeline_read_only_policy(&mut self, pipelinename: &str) {
        self.append(&CODE_PIPELINE_READ_ONLY_POLICY, &[pipelinename]);
    }

    /// Gives access to Amazon Comprehend APIs for detecting entities, key phrases, languages and sentiments
    pub fn add_comprehend_basic_access_policy(&mut self) {
        self.append(&COMPREHEND_BASIC_ACCESS_POLICY, &[]);
    }

    /// Gives access to the readonly Cost Explorer APIs for billing history
    pub fn add_cost_explorer_read_only_policy(&mut self) {
        self.append(&COST_EXPLORER_READ_ONLY_POLICY, &[]);
    }

    /// Gives read/write permissions to DynamoDB on-demand backups for a table
    pub fn add_dynamo_db_backup_full_access_policy(&mut self, table_name: &str) {
        self.append(&DYNAMO_DB_BACKUP_FULL_ACCESS_POLICY, &[table_name]);
    }

    /// Gives CRUD access to a DynamoDB Table
    pub fn add_dynamo_db_crud_policy(&mut self, table_name: &str) {
        self.append(&DYNAMO_DB_CRUD_POLICY, &[table_name]);
    }

    /// Gives read only access to a DynamoDB Table
    pub fn add_dynamo_db_read_policy(&mut self, table_name: &str) {
        self.append(&DYNAMO_DB_READ_POLICY, &[table_name]);
    }

    /// Gives access reconfigure to a DynamoDB Table
    pub fn add_dynamo_db_reconfigure_policy(&mut self, table_name: &str) {
        self.append(&DYNAMO_DB_RECONFIGURE_POLICY, &[table_name]);
    }

    /// Gives permissions to restore a table from backup
    pub fn add_dynamo_db_restore_from_backup_policy(&mut self, table_name: &str) {
        self.append(&DYNAMO_DB_RESTORE_FROM_BACKUP_POLICY, &[table_name]);
    }

    /// Gives permission to describe and read a DynamoDB Stream and Records
    pub fn add_dynamo_db_stream_read_policy(&mut self, stream_name: &str, table_name: &str) {
        self.append(&DYNAMO_DB_STREAM_READ_POLICY, &[stream_name, table_name]);
    }

    /// Gives write only access to a DynamoDB Table
    pub fn add_dynamo_db_write_policy(&mut self, table_name: &str) {
        self.append(&DYNAMO_DB_WRITE_POLICY, &[table_name]);
    }

    /// Gives permission top copy EC2 Images
    pub fn add_ec2_copy_image_policy(&mut self, image_id: &str) {
        self.append(&EC2_COPY_IMAGE_POLICY, &[image_id]);
    }

    /// Gives permission to describe EC2 instances
    pub fn add_ec2_describe_policy(&mut self) {
        self.append(&EC2_DESCRIBE_POLICY, &[]);
    }

    /// Gives permission to describe or list Amazon EKS clusters
    pub fn add_eks_describe_policy(&mut self) {
        self.append(&EKS_DESCRIBE_POLICY, &[]);
    }

    /// Gives POST and PUT permissions to Elasticsearch
    pub fn add_elasticsearch_http_post_policy(&mut self, domain_name: &str) {
        self.append(&ELASTICSEARCH_HTTP_POST_POLICY, &[domain_name]);
    }

    /// Gives permissions to send events to EventBridge
    pub fn add_event_bridge_put_events_policy(&mut self, event_bus_name: &str) {
        self.append(&EVENT_BRIDGE_PUT_EVENTS_POLICY, &[event_bus_name]);
    }

    /// Gives permission to filter Log Events from a specified Log Group
    pub fn add_filter_log_events_policy(&mut self, log_group_name: &str) {
        self.append(&FILTER_LOG_EVENTS_POLICY, &[log_group_name]);
    }

    /// Gives permission to create, write to, update, and delete a Kinesis Firehose Delivery Stream
    pub fn add_firehose_crud_policy(&mut self, delivery_stream_name: &str) {
        self.append(&FIREHOSE_CRUD_POLICY, &[delivery_stream_name]);
    }

    /// Gives permission to write to a Kinesis Firehose Delivery Stream
    pub fn add_firehose_write_policy(&mut self, delivery_stream_name: &str) {
        self.append(&FIREHOSE_WRITE_POLICY, &[delivery_stream_name]);
    }

    /// Gives permission to decrypt with KMS Key
    pub fn add_kms_decrypt_policy(&mut self, key_id: &str) {
        self.append(&KMS_DECRYPT_POLICY, &[key_id]);
    }

    /// Gives permission to encrypt with KMS Key
    pub fn add_kms_encrypt_policy(&mut self, key_id: &str) {
        self.append(&KMS_ENCRYPT_POLICY, &[key_id]);
    }

    /// Gives permission to create, publish and delete Kinesis Stream
    pub fn add_kinesis_crud_policy(&mut self, stream_name: &str) {
        self.append(&KINESIS_CRUD_POLICY, &[stream_name]);
    }

    /// Gives permission to list and read a Kinesis stream
    pub fn add_kinesis_stream_read_policy(&mut self) {
        self.append(&KINESIS_STREAM_READ_POLICY, &[]);
    }

    /// Gives permission to invoke a Lambda Function, Alias or Version
    pub fn add_lambda_invoke_policy(&mut self, function_name: &str) {
        self.append(&LAMBDA_INVOKE_POLICY, &[function_name]);
    }

    /// Gives write only permissions to put event data for all application resources
    pub fn add_mobile_analytics_write_only_access_policy(&mut self) {
        self.append(&MOBILE_ANALYTICS_WRITE_ONLY_ACCESS_POLICY, &[]);
    }

    /// Gives readonly permission to list child account names and ids
    pub fn add_organizations_list_accounts_policy(&mut self) {
        self.append(&ORGANIZATIONS_LIST_ACCOUNTS_POLICY, &[]);
    }

    /// Gives permissions to get and update endpoints for a Pinpoint application
    pub fn add_pinpoint_endpoint_access_policy(&mut self, pinpoint_application_id: &str) {
        self.append(&PINPOINT_ENDPOINT_ACCESS_POLICY, &[pinpoint_application_id]);
    }

    /// Gives full access permissions to Polly lexicon resources
    pub fn add_polly_full_access_policy(&mut self, lexicon_name: &str) {
        self.append(&POLLY_FULL_ACCESS_POLICY, &[lexicon_name]);
    }

    /// Gives permission to detect faces, labels and text
    pub fn add_rekognition_detect_only_policy(&mut self) {
        self.append(&REKOGNITION_DETECT_ONLY_POLICY, &[]);
    }

    /// Gives permission to add, delete and search faces in a collection
    pub fn add_rekognition_faces_management_policy(&mut self, collection_id: &str) {
        self.append(&REKOGNITION_FACES_MANAGEMENT_POLICY, &[collection_id]);
    }

    /// Gives permission to compare and detect faces and labels
    pub fn add_rekognition_faces_policy(&mut self) {
        self.append(&REKOGNITION_FACES_POLICY, &[]);
    }

    /// Gives permission to detect object and moderation labels
    pub fn add_rekognition_labels_policy(&mut self) {
        self.append(&REKOGNITION_LABELS_POLICY, &[]);
    }

    /// Gives permission to compare and detect faces and labels
    pub fn add_rekognition_no_data_access_policy(&mut self, collection_id: &str) {
        self.append(&REKOGNITION_NO_DATA_ACCESS_POLICY, &[collection_id]);
    }

    /// Gives permission to list and search faces
    pub fn add_rekognition_read_policy(&mut self, collection_id: &str) {
        self.append(&REKOGNITION_READ_POLICY, &[collection_id]);
    }

    /// Gives permission to create collection and index faces
    pub fn add_rekognition_write_only_access_policy(&mut self, collection_id: &str) {
        self.append(&REKOGNITION_WRITE_ONLY_ACCESS_POLICY, &[collection_id]);
    }

    /// Gives CRUD permissions to objects in the S3 Bucket
    pub fn add_s3_crud_policy(&mut self, bucket_name: &str) {
        self.append(&S3_CRUD_POLICY, &[bucket_name]);
    }

    /// Gives full access permissions to objects in the S3 Bucket
    pub fn add_s3_full_access_policy(&mut self, bucket_name: &str) {
        self.append(&S3_FULL_ACCESS_POLICY, &[bucket_name]);
    }

    /// Gives read permissions to objects in the S3 Bucket
    pub fn add_s3_read_policy(&mut self, bucket_name: &str) {
        self.append(&S3_READ_POLICY, &[bucket_name]);
    }

    /// Gives write permissions to objects in the S3 Bucket
    pub fn add_s3_write_policy(&mut self, bucket_name: &str) {
        self.append(&S3_WRITE_POLICY, &[bucket_name]);
    }

    /// Gives permission to send email, templated email, templated bulk emails and verify identity
    pub fn add_ses_bulk_templated_crud_policy(&mut self, identity_name: &str) {
        self.append(&SES_BULK_TEMPLATED_CRUD_POLICY, &[identity_name]);
    }

    /// Gives permission to send email and verify identity
    pub fn add_ses_crud_policy(&mut self, identity_name: &str) {
        self.append(&SES_CRUD_POLICY, &[identity_name]);
    }

    /// Gives permission to create, get, list, update and delete SES Email Templates
    pub fn add_ses_email_template_crud_policy(&mut self) {
        self.append(&SES_EMAIL_TEMPLATE_CRUD_POLICY, &[]);
    }

    /// Gives SendBounce permission to a SES identity
    pub fn add_ses_send_bounce_policy(&mut self, identity_name: &str) {
        self.append(&SES_SEND_BOUNCE_POLICY, &[identity_name]);
    }

    /// Gives permissions to create, publish and subscribe to SNS topics
    pub fn add_sns_crud_policy(&mut self, topic_name: &str) {
        self.append(&SNS_CRUD_POLICY, &[topic_name]);
    }

    /// Gives permission to publish message to SNS Topic
    pub fn add_sns_publish_message_policy(&mut self, topic_name: &str) {
        self.append(&SNS_PUBLISH_MESSAGE_POLICY, &[topic_name]);
    }

    /// Gives permissions to poll an SQS Queue
    pub fn add_sqs_poller_policy(&mut self, queue_name: &str) {
        self.append(&SQS_POLLER_POLICY, &[queue_name]);
    }

    /// Gives permission to send message to SQS Queue
    pub fn add_sqs_send_message_policy(&mut self, queue_name: &str) {
        self.append(&SQS_SEND_MESSAGE_POLICY, &[queue_name]);
    }

    /// Gives access to a parameter to load secrets in this account. If not using default key, KMSDecryptPolicy will also be needed.
    pub fn add_ssm_parameter_read_policy(&mut self) {
        self.append(&SSM_PARAMETER_READ_POLICY, &[]);
    }

    /// Gives access permissions to create and list applications in the AWS Serverless Application Repository service
    pub fn add_serverless_repo_read_write_access_policy(&mut self) {
        self.append(&SERVERLESS_REPO_READ_WRITE_ACCESS_POLICY, &[]);
    }

    /// Gives permission to start a Step Functions state machine execution
    pub fn add_step_functions_execution_policy(&mut self, state_machine_name: &str) {
        self.append(&STEP_FUNCTIONS_EXECUTION_POLICY, &[state_machine_name]);
    }

    /// Gives access to detect and analyze documents with Textract
    pub fn add_textract_detect_analyze_policy(&mut self) {
        self.append(&TEXTRACT_DETECT_ANALYZE_POLICY, &[]);
    }

    /// Gives access to get detected and analyzed documents from Textract
    pub fn add_textract_get_result_policy(&mut self) {
        self.append(&TEXTRACT_GET_RESULT_POLICY, &[]);
    }

    /// Gives full access to Textract
    pub fn add_textract_policy(&mut self) {
        self.append(&TEXTRACT_POLICY, &[]);
    }

    /// Gives access to create, delete, describe and detach ENIs
    pub fn add_vpc_access_policy(&mut self) {
        self.append(&VPC_ACCESS_POLICY, &[]);
    }
}

/// Every template in the catalogue, in generation order.
pub static TEMPLATES: &[PolicyTemplate] = &[
    AMI_DESCRIBE_POLICY,
    AWS_SECRETS_MANAGER_GET_SECRET_VALUE_POLICY,
    AWS_SECRETS_MANAGER_ROTATION_POLICY,
    ATHENA_QUERY_POLICY,
    CLOUD_FORMATION_DESCRIBE_STACKS_POLICY,
    CLOUD_WATCH_DASHBOARD_POLICY,
    CLOUD_WATCH_DESCRIBE_ALARM_HISTORY_POLICY,
    CLOUD_WATCH_PUT_METRIC_POLICY,
    CODE_COMMIT_CRUD_POLICY,
    CODE_COMMIT_READ_POLICY,
    CODE_PIPELINE_LAMBDA_EXECUTION_POLICY,
    CODE_PIPELINE_READ_ONLY_POLICY,
    COMPREHEND_BASIC_ACCESS_POLICY,
    COST_EXPLORER_READ_ONLY_POLICY,
    DYNAMO_DB_BACKUP_FULL_ACCESS_POLICY,
    DYNAMO_DB_CRUD_POLICY,
    DYNAMO_DB_READ_POLICY,
    DYNAMO_DB_RECONFIGURE_POLICY,
    DYNAMO_DB_RESTORE_FROM_BACKUP_POLICY,
    DYNAMO_DB_STREAM_READ_POLICY,
    DYNAMO_DB_WRITE_POLICY,
    EC2_COPY_IMAGE_POLICY,
    EC2_DESCRIBE_POLICY,
    EKS_DESCRIBE_POLICY,
    ELASTICSEARCH_HTTP_POST_POLICY,
    EVENT_BRIDGE_PUT_EVENTS_POLICY,
    FILTER_LOG_EVENTS_POLICY,
    FIREHOSE_CRUD_POLICY,
    FIREHOSE_WRITE_POLICY,
    KMS_DECRYPT_POLICY,
    KMS_ENCRYPT_POLICY,
    KINESIS_CRUD_POLICY,
    KINESIS_STREAM_READ_POLICY,
    LAMBDA_INVOKE_POLICY,
    MOBILE_ANALYTICS_WRITE_ONLY_ACCESS_POLICY,
    ORGANIZATIONS_LIST_ACCOUNTS_POLICY,
    PINPOINT_ENDPOINT_ACCESS_POLICY,
    POLLY_FULL_ACCESS_POLICY,
    REKOGNITION_DETECT_ONLY_POLICY,
    REKOGNITION_FACES_MANAGEMENT_POLICY,
    REKOGNITION_FACES_POLICY,
    REKOGNITION_LABELS_POLICY,
    REKOGNITION_NO_DATA_ACCESS_POLICY,
    REKOGNITION_READ_POLICY,
    REKOGNITION_WRITE_ONLY_ACCESS_POLICY,
    S3_CRUD_POLICY,
    S3_FULL_ACCESS_POLICY,
    S3_READ_POLICY,
    S3_WRITE_POLICY,
    SES_BULK_TEMPLATED_CRUD_POLICY,
    SES_CRUD_POLICY,
    SES_EMAIL_TEMPLATE_CRUD_POLICY,
    SES_SEND_BOUNCE_POLICY,
    SNS_CRUD_POLICY,
    SNS_PUBLISH_MESSAGE_POLICY,
    SQS_POLLER_POLICY,
    SQS_SEND_MESSAGE_POLICY,
    SSM_PARAMETER_READ_POLICY,
    SERVERLESS_REPO_READ_WRITE_ACCESS_POLICY,
    STEP_FUNCTIONS_EXECUTION_POLICY,
    TEXTRACT_DETECT_ANALYZE_POLICY,
    TEXTRACT_GET_RESULT_POLICY,
    TEXTRACT_POLICY,
    VPC_ACCESS_POLICY,
];
